/// Seam between UI event handlers and service calls. Everything is
/// synchronous today; handlers route work through here so an off-thread
/// dispatch can be swapped in without touching call sites.
pub fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}

/// Hides the console window a windowed-subsystem-less build drags along.
#[cfg(windows)]
pub fn hide_console_window() {
    use windows_sys::Win32::System::Console::GetConsoleWindow;
    use windows_sys::Win32::UI::WindowsAndMessaging::{ShowWindow, SW_HIDE};

    let window = unsafe { GetConsoleWindow() };
    if !window.is_null() {
        unsafe { ShowWindow(window, SW_HIDE) };
    }
}
