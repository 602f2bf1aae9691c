/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, with edits to a formula logged at the `trace` level and (re)builds at the `debug` level.

Note, no log implementation is provided.
The `dnf_fit` binary installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, and so output may be narrowed with, e.g., `RUST_LOG=tracker=trace`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [datasets](crate::data)
    pub const DATASET: &str = "dataset";

    /// Logs related to the [literal catalog](crate::catalog)
    pub const CATALOG: &str = "catalog";

    /// Logs related to structural edits of a [formula](crate::structures::formula)
    pub const FORMULA: &str = "formula";

    /// Logs related to the coverage counts of a formula
    pub const TRACKER: &str = "tracker";
}
