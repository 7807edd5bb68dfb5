use miette::Result;

/// A configuration table as deserialized from the file, which can be turned into
/// its resolved form without any outside information.
pub trait ResolvableConfiguration {
    type Resolved;

    /// Resolve the table into its `Resolved` type.
    /// Returning `Err` means the table could not be turned into its resolved form.
    fn resolve(self) -> Result<Self::Resolved>;
}


/// A configuration table whose resolution needs additional context,
/// usually the project root the configuration file lives in.
pub trait ResolvableConfigurationWithContext {
    type Context;
    type Resolved;

    /// Resolve the table into its `Resolved` type using `context`.
    /// Returning `Err` means the table could not be turned into its resolved form.
    fn resolve(self, context: Self::Context) -> Result<Self::Resolved>;
}
