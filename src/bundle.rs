use crate::version::Version;

/// Injection points in the template. Literal substrings, matched exactly.
pub const VERSION_TOKEN: &str = "{{voicefaster-version}}";
pub const STYLE_TOKEN: &str = "{{voicefaster.css}}";
pub const SCRIPT_TOKEN: &str = "{{voicefaster-classes.js}}";

/// Substitute the three placeholder tokens into the template, in order:
/// version, stylesheet, script. Each replacement is literal and global; a
/// token that never appears is simply left unsubstituted. The stylesheet
/// and script bodies are injected verbatim, no escaping or trimming.
pub fn render(template: &str, version: &Version, stylesheet: &str, script: &str) -> String {
    template
        .replace(VERSION_TOKEN, &version.to_string())
        .replace(STYLE_TOKEN, stylesheet)
        .replace(SCRIPT_TOKEN, script)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: Version = Version {
        major: 1,
        minor: 0,
        patch: 4,
    };

    #[test]
    fn all_tokens_are_replaced() {
        let template = "// v{{voicefaster-version}}\n<style>{{voicefaster.css}}</style>\n<script>{{voicefaster-classes.js}}</script>\n";
        let out = render(template, &VERSION, ".player { color: red; }", "class Player {}");

        assert!(!out.contains(VERSION_TOKEN));
        assert!(!out.contains(STYLE_TOKEN));
        assert!(!out.contains(SCRIPT_TOKEN));
        assert_eq!(
            out,
            "// v1.0.4\n<style>.player { color: red; }</style>\n<script>class Player {}</script>\n"
        );
    }

    #[test]
    fn absent_token_leaves_template_unchanged() {
        let template = "no placeholders here";
        assert_eq!(render(template, &VERSION, "css", "js"), template);
    }

    #[test]
    fn repeated_token_is_replaced_everywhere() {
        let template = "{{voicefaster-version}} and again {{voicefaster-version}}";
        assert_eq!(render(template, &VERSION, "", ""), "1.0.4 and again 1.0.4");
    }

    #[test]
    fn injected_content_is_verbatim() {
        let template = "<script>{{voicefaster-classes.js}}</script>";
        let script = "  // leading whitespace kept\nconst $pattern = \"$1\";\n";
        let out = render(template, &VERSION, "", script);
        assert_eq!(out, format!("<script>{script}</script>"));
    }
}
