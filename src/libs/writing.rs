use std::{fmt, io::Write};

pub mod cc {
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const LIGHT_GRAY: &str = "\x1b[38;5;245m";
    pub const LIGHT_GREEN: &str = "\x1b[92m";
    pub const LIGHT_BLUE: &str = "\x1b[94m";
}

/// Write one timestamped, coloured diagnostic line to stderr.
/// Stdout is reserved for report output, so nothing here touches it.
pub fn emit(color: &str, args: fmt::Arguments<'_>) {
    let time = chrono::Utc::now().format("%H:%M:%S%.3f");
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{}{} | {}{}{}{}",
        cc::LIGHT_GRAY,
        time,
        cc::RESET,
        color,
        args,
        cc::RESET
    );
}

#[macro_export]
macro_rules! log {
    //    log!("plain {}", x);
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::libs::writing::emit(
            $crate::libs::writing::cc::LIGHT_GRAY,
            format_args!($fmt $(, $arg)*),
        )
    };

    //    log!(cc::GREEN, "fetched {}", addr);
    ($color:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::libs::writing::emit($color, format_args!($fmt $(, $arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::libs::writing::emit(
            $crate::libs::writing::cc::ORANGE,
            format_args!($($arg)*),
        )
    };
}
