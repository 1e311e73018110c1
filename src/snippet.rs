// File: ./src/snippet.rs
// Tagged template lookup for developer code snippets
use crate::color::Color;
use anyhow::bail;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetKind {
    SwiftUi,
    UiKit,
    Css,
    AndroidXml,
}

impl SnippetKind {
    pub const ALL: [SnippetKind; 4] = [
        SnippetKind::SwiftUi,
        SnippetKind::UiKit,
        SnippetKind::Css,
        SnippetKind::AndroidXml,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SnippetKind::SwiftUi => "SwiftUI",
            SnippetKind::UiKit => "UIKit",
            SnippetKind::Css => "CSS",
            SnippetKind::AndroidXml => "Android XML",
        }
    }

    /// Renders the declaration-plus-usage snippet for the given color.
    /// Fractional channels are printed with 3 decimals; the CSS integer
    /// triple uses the same truncation as the hex output.
    pub fn render(&self, color: Color) -> String {
        match self {
            SnippetKind::SwiftUi => format!(
                r#"extension Color {{
    static let customColor = Color(.sRGB, red: {r:.3}, green: {g:.3}, blue: {b:.3})
}}

// Usage
Text("Hello World")
    .foregroundColor(.customColor)"#,
                r = color.r,
                g = color.g,
                b = color.b
            ),
            SnippetKind::UiKit => format!(
                r#"extension UIColor {{
    static let customColor = UIColor(red: {r:.3}, green: {g:.3}, blue: {b:.3}, alpha: 1.0)
}}

// Usage
label.textColor = .customColor"#,
                r = color.r,
                g = color.g,
                b = color.b
            ),
            SnippetKind::Css => format!(
                r#":root {{
    --custom-color: {hex};
    --custom-color-rgb: {r}, {g}, {b};
}}

.custom-text {{
    color: var(--custom-color);
    background-color: rgba(var(--custom-color-rgb), 0.1);
}}"#,
                hex = color.to_hex(),
                r = color.r8(),
                g = color.g8(),
                b = color.b8()
            ),
            SnippetKind::AndroidXml => format!(
                r#"<resources>
    <color name="custom_color">{hex}</color>
</resources>

<!-- Usage in layout -->
<TextView
    android:textColor="@color/custom_color"
    android:text="Hello World" />"#,
                hex = color.to_hex()
            ),
        }
    }
}

impl FromStr for SnippetKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "swiftui" => Ok(SnippetKind::SwiftUi),
            "uikit" => Ok(SnippetKind::UiKit),
            "css" => Ok(SnippetKind::Css),
            "android-xml" | "android" => Ok(SnippetKind::AndroidXml),
            other => bail!("unknown snippet kind '{other}' (expected swiftui, uikit, css or android-xml)"),
        }
    }
}
