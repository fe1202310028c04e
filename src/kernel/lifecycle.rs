use super::ConfigError;

/// Constructor validation lifecycle shared by kernel structs.
///
/// A kernel that exists was built from a config that passed
/// validation, so execution entrypoints only need to re-check
/// runtime shapes, never configuration.
pub trait KernelLifecycle: Sized {
    /// Kernel config type.
    type Config;

    /// Construct a validated kernel from config.
    fn try_new(config: Self::Config) -> Result<Self, ConfigError>;
}
