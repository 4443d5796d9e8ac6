pub mod conventions;
pub mod generate;
pub mod start_feature;
pub mod validate;

/// Print a tool response as pretty JSON on stdout.
pub(crate) fn print_response(response: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}
