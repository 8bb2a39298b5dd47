//! MDX report rendering.

use crate::model::{defaults, ScriptInfo};

/// Fixed introduction placed at the top of every generated report.
const HEADER: &str = "## My Tampermonkey Userscripts\n\n\
    This is just my personal list of userscripts that I use. \
    I will try to keep this list updated as I add or remove userscripts.\n\n";

/// Render the aggregated report for an ordered list of scripts.
///
/// Pure function of its input: the fixed header followed by one section per
/// script, each closed by a horizontal rule.
pub fn render(scripts: &[ScriptInfo]) -> String {
    let mut output = String::from(HEADER);
    for script in scripts {
        render_section(&mut output, script);
    }
    output
}

/// Append one script's section to the report.
fn render_section(output: &mut String, script: &ScriptInfo) {
    output.push_str(&format!("### {}\n\n", script.name));
    output.push_str(&format!("{}\n\n", script.description));
    output.push_str(&format!("**Author:** {}\n\n", script.author));
    match &script.download_url {
        Some(url) => output.push_str(&format!("**Download:** [{url}]({url})\n\n")),
        None => output.push_str(&format!("**Download:** {}\n\n", defaults::DOWNLOAD)),
    }
    output.push_str("---\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(name: &str, url: Option<&str>) -> ScriptInfo {
        ScriptInfo {
            name: name.to_string(),
            description: "Does things".to_string(),
            author: "someone".to_string(),
            download_url: url.map(str::to_string),
        }
    }

    #[test]
    fn empty_list_renders_header_only() {
        assert_eq!(render(&[]), HEADER);
    }

    #[test]
    fn resolved_url_renders_link() {
        let output = render(&[script("Foo", Some("https://x/y"))]);
        assert!(output.contains("### Foo\n\n"));
        assert!(output.contains("**Author:** someone\n\n"));
        assert!(output.contains("**Download:** [https://x/y](https://x/y)\n\n"));
    }

    #[test]
    fn unresolved_url_renders_placeholder() {
        let output = render(&[script("Foo", None)]);
        assert!(output.contains("**Download:** N/A\n\n"));
        assert!(!output.contains("]("));
    }

    #[test]
    fn sections_keep_input_order_and_separators() {
        let output = render(&[script("One", None), script("Two", None)]);
        let one = output.find("### One").unwrap();
        let two = output.find("### Two").unwrap();
        assert!(one < two);
        assert_eq!(output.matches("---\n\n").count(), 2);
    }
}
