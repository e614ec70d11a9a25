//! Style presets and the fixed instruction templates that accompany a
//! prompt.

use serde::{Deserialize, Serialize};

/// A named style preset selecting which instruction template is sent
/// with the user's prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Modern,
    Minimal,
    Elegant,
}

impl StyleTag {
    /// All styles, in the order previews are displayed.
    pub fn all() -> [StyleTag; 3] {
        [StyleTag::Modern, StyleTag::Minimal, StyleTag::Elegant]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::Modern => "modern",
            StyleTag::Minimal => "minimal",
            StyleTag::Elegant => "elegant",
        }
    }

    /// The style-specific instruction block.
    pub fn instructions(&self) -> &'static str {
        match self {
            StyleTag::Modern => {
                "Create a modern, feature-rich UI component that reflects current web design trends.\n\
                 Focus on creating an impressive, production-ready design with:\n\
                 - Bold typography and color schemes\n\
                 - Interactive elements and micro-interactions\n\
                 - Engaging visual hierarchy\n\
                 - Responsive layout for all devices\n\
                 - Accessibility features\n\
                 - Modern UI patterns specific to the analyzed industry/purpose"
            }
            StyleTag::Minimal => {
                "Design a minimal, clean UI component that emphasizes content and functionality.\n\
                 Focus on creating a sophisticated, professional design with:\n\
                 - Clean typography and whitespace\n\
                 - Clear visual hierarchy\n\
                 - Essential interactive elements\n\
                 - Responsive and adaptive layout\n\
                 - Accessibility-first approach\n\
                 - Industry-specific minimal UI patterns"
            }
            StyleTag::Elegant => {
                "Create an elegant, premium UI component with refined details and luxury aesthetics.\n\
                 Focus on creating a high-end, polished design with:\n\
                 - Sophisticated typography and color palette\n\
                 - Premium visual elements and animations\n\
                 - Refined interactive features\n\
                 - Fully responsive premium layout\n\
                 - Accessibility integration\n\
                 - Luxury-focused industry patterns"
            }
        }
    }
}

impl std::fmt::Display for StyleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StyleTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "modern" => Ok(StyleTag::Modern),
            "minimal" => Ok(StyleTag::Minimal),
            "elegant" => Ok(StyleTag::Elegant),
            other => Err(format!(
                "unknown style '{}' (expected modern, minimal, or elegant)",
                other
            )),
        }
    }
}

/// Prompt asking the model to analyze the user's request before any
/// per-style generation.
pub fn analyze_prompt(prompt: &str) -> String {
    format!(
        r#"Analyze the following prompt and extract key information:
- Industry/Domain (e.g., e-commerce, education, healthcare)
- Purpose (e.g., sales, information, learning)
- Target audience
- Key features needed
- Tone/Style preferences

Prompt: "{}"

Return the analysis in a structured format."#,
        prompt
    )
}

/// System prompt shared by every per-style request. The analysis block
/// is omitted when the analyze step was skipped.
pub fn system_prompt(analysis: Option<&str>) -> String {
    let analysis_block = match analysis {
        Some(a) => format!("\n\nAnalysis of user's request:\n{}\n", a),
        None => String::new(),
    };
    format!(
        r#"You are an expert UI developer specializing in creating premium components styled with utility classes.
Your task is to generate a comprehensive, production-ready UI component based on the user's request and style requirements.{}
Important rules:
1. Return ONLY pure markup without any component wrapper, imports, or exports
2. Use utility CSS classes extensively for styling, including:
   - Complex layouts with grid and flexbox
   - Responsive design for all screen sizes
   - Hover and focus states
   - Gradients and shadows
   - Typography hierarchy
3. The markup must have exactly one root element
4. Use semantic HTML elements
5. Ensure accessibility with ARIA attributes
6. Generate realistic, context-appropriate content
7. Do not include <script> or <style> elements or event handlers"#,
        analysis_block
    )
}

/// Per-style user message.
pub fn user_prompt(style: StyleTag, prompt: &str, analysis: Option<&str>) -> String {
    let context = match analysis {
        Some(a) => format!("Based on the analysis:\n{}\n\n", a),
        None => String::new(),
    };
    format!(
        r#"{instructions}

{context}User request: "{prompt}"

Create a beautiful UI component that perfectly matches the request.
Remember to return ONLY the markup without any wrapper, imports, or exports.
The markup should be production-ready, responsive, and visually impressive.
Include realistic content that matches the context and purpose."#,
        instructions = style.instructions(),
        context = context,
        prompt = prompt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_parse_case_insensitively() {
        assert_eq!("Modern".parse::<StyleTag>().unwrap(), StyleTag::Modern);
        assert_eq!("ELEGANT".parse::<StyleTag>().unwrap(), StyleTag::Elegant);
        assert!("brutalist".parse::<StyleTag>().is_err());
    }

    #[test]
    fn all_styles_in_display_order() {
        let names: Vec<&str> = StyleTag::all().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["modern", "minimal", "elegant"]);
    }

    #[test]
    fn user_prompt_carries_style_and_request() {
        let msg = user_prompt(StyleTag::Minimal, "a pricing page", Some("industry: saas"));
        assert!(msg.contains("minimal, clean UI component"));
        assert!(msg.contains("a pricing page"));
        assert!(msg.contains("industry: saas"));
    }

    #[test]
    fn system_prompt_omits_analysis_block_when_skipped() {
        let with = system_prompt(Some("industry: retail"));
        let without = system_prompt(None);
        assert!(with.contains("industry: retail"));
        assert!(!without.contains("Analysis of user's request"));
    }

    #[test]
    fn analyze_prompt_embeds_the_request() {
        let p = analyze_prompt("a travel blog");
        assert!(p.contains("a travel blog"));
        assert!(p.contains("Industry/Domain"));
    }
}
