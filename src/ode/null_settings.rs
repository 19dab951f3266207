use clap::Args;

/// Settings for methods with nothing to configure.
#[derive(Args, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullSettings {}
