#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Editor Controls ---
    CycleTheme,   // Hotkey registered by the theme control (c)
    CyclePadding, // Next padding option (p)

    // --- Theme Dropdown ---
    OpenThemeDropdown,        // Open the theme list (t or click)
    DropdownNext,             // Next entry
    DropdownPrev,             // Previous entry
    DropdownHighlight(usize), // Highlight a row (mouse)
    DropdownConfirm,          // Commit the highlighted entry
    SelectTheme(String),      // Value-change callback: theme display name
    CancelMode,               // ESC key (close dropdown / clear error)

    // --- Async Results ---
    SettingsSaved(Result<(), String>),
}
