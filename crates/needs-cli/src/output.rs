use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_is_compact_json() {
        let value = serde_json::json!({ "profile": "BNPB_en" });
        assert_eq!(
            render(&value, OutputFormat::Raw).unwrap(),
            r#"{"profile":"BNPB_en"}"#
        );
    }

    #[test]
    fn ordered_maps_keep_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("Toilets", "0.05");
        map.insert("Rice [kg]", "2.8");
        assert_eq!(
            render(&map, OutputFormat::Raw).unwrap(),
            r#"{"Toilets":"0.05","Rice [kg]":"2.8"}"#
        );
    }
}
