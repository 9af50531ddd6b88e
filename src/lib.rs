pub mod errors;
pub mod model;
pub mod send;
pub mod validate;

/// Default log filter for the binary; --verbose raises it to debug
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "send_fake=debug"
    } else {
        "send_fake=info"
    }
}
