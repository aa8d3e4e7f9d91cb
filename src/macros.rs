// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Literals, consts, &str vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

