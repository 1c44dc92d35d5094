#[macro_export]
macro_rules! diag_error {
    ($diag:expr, $($arg:tt)*) => {
        $diag.error(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! diag_warn {
    ($diag:expr, $($arg:tt)*) => {
        $diag.warn(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! diag_debug {
    ($diag:expr, $($arg:tt)*) => {
        $diag.debug(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! trace_ppu_event {
    ($diag:expr, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            $diag.trace(format_args!("[PPU EVENT] {}", format_args!($($arg)*)));
        }
    };
}

#[macro_export]
macro_rules! trace_cpu_event {
    ($diag:expr, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            $diag.trace(format_args!("[CPU EVENT] {}", format_args!($($arg)*)));
        }
    };
}
