#[macro_export]
#[cfg(debug_assertions)]
macro_rules! println_debug {
    ($($x:tt)*) => {{
        eprint!("[debug] ");
        eprintln!($($x)*);
    }}
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! println_debug {
    ($($x:tt)*) => {}
}

/// Logs to stderr when `--verbose` is set.
#[macro_export]
macro_rules! println_verbose {
    ($config:expr, $($x:tt)*) => {{
        if $config.verbose {
            eprint!("[verbose] ");
            eprintln!($($x)*);
        }
    }}
}

#[inline]
pub fn is_alphabetic(c: char) -> bool {
    c.is_alphabetic()
}

#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    c.is_alphanumeric()
}

/// Whether `key` can be written as a TOML bare key.
pub fn is_bare_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
