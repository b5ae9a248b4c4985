use crate::app::persistence::Settings;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SaveSettings(Settings),
}
