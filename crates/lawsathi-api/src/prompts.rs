//! Fixed prompt text and the language handling wrapped around it.

use serde::Deserialize;

/// Persona and scope sent as the system message on every model call
pub const LEGAL_SYSTEM_MESSAGE: &str = "You are LawSathi, an expert legal assistant specializing in Indian laws, government schemes, and legal rights. Your mission is to help rural and low-literacy communities understand legal matters in simple, accessible language.

Core Responsibilities:
1. Answer ANY questions related to Indian laws, legal rights, government schemes, and legal procedures
2. Provide accurate, up-to-date information about Indian legal system
3. Explain complex legal concepts in simple, easy-to-understand language
4. Guide users on legal procedures, documentation, and their rights
5. Provide information about government schemes and benefits they're entitled to

Key Areas of Expertise:
- Constitutional Rights and Fundamental Rights
- Criminal Law and Procedures
- Civil Law and Property Rights
- Family Law (Marriage, Divorce, Inheritance)
- Labor Laws and Employment Rights
- Consumer Protection Laws
- Land and Property Laws
- Government Schemes (PM-KISAN, Aadhar, PDS, MGNREGA, etc.)
- Legal Aid and Free Legal Services
- Court Procedures and Documentation
- Police Procedures and Rights during Arrest
- Women's Rights and Protection Laws
- Child Rights and Protection
- Senior Citizen Rights
- Disability Rights
- Tribal Rights and Special Provisions

Guidelines:
- Always provide practical, actionable advice
- Use simple language avoiding legal jargon
- Include relevant sections/acts when helpful
- Suggest next steps and where to seek help
- Be empathetic and supportive
- If unsure about specific cases, recommend consulting a lawyer
- Focus on Indian law and context specifically

Remember: You are helping people who may have limited education or legal knowledge, so clarity and simplicity are crucial.";

/// Returned in place of an answer when the model call fails
pub const APOLOGY_MESSAGE: &str =
    "I apologize, but I'm having trouble processing your request right now. Please try again later.";

/// Citation labels attached to every chat answer
pub const CHAT_SOURCES: [&str; 2] = ["Indian Legal Database", "Government Schemes Portal"];

/// Characters of extracted text echoed back in an upload response
pub const PREVIEW_CHARS: usize = 500;

/// Answer language requested by the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
        }
    }

    /// Prefix `message` with the instruction that pins the answer language
    pub fn instruct(&self, message: &str) -> String {
        match self {
            Self::Hindi => format!("Please respond in simple Hindi (Devanagari script): {}", message),
            Self::English => format!("Please respond in simple English: {}", message),
        }
    }
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("hindi") {
            Self::Hindi
        } else {
            Self::English
        }
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

/// Analysis request for an uploaded document, embedding its full text
pub fn document_explanation_prompt(extracted_text: &str, language: Language) -> String {
    format!(
        "Analyze this legal document and provide a simplified explanation in {}:

Document Text:
{}

Please provide:
1. What type of legal document this is
2. Key points and important information
3. What actions the person should take (if any)
4. Any deadlines or important dates
5. Rights and obligations mentioned
6. Whether legal consultation is recommended

Make the explanation simple and easy to understand for someone with limited legal knowledge.",
        language.name(),
        extracted_text
    )
}

/// First `max_chars` characters followed by `...`, or the text unchanged if it fits
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parsing_is_lenient() {
        assert_eq!(Language::from("hindi"), Language::Hindi);
        assert_eq!(Language::from(" HINDI "), Language::Hindi);
        assert_eq!(Language::from("english"), Language::English);
        assert_eq!(Language::from("tamil"), Language::English);
        assert_eq!(Language::from(""), Language::English);
    }

    #[test]
    fn test_language_deserializes_from_string() {
        let lang: Language = serde_json::from_str("\"Hindi\"").unwrap();
        assert_eq!(lang, Language::Hindi);
    }

    #[test]
    fn test_instruction_prefix() {
        assert_eq!(
            Language::English.instruct("What is RTI?"),
            "Please respond in simple English: What is RTI?"
        );
        assert!(Language::Hindi
            .instruct("RTI kya hai?")
            .starts_with("Please respond in simple Hindi (Devanagari script): "));
    }

    #[test]
    fn test_explanation_prompt_embeds_text_and_language() {
        let prompt = document_explanation_prompt("Notice under Section 138", Language::Hindi);
        assert!(prompt.starts_with("Analyze this legal document and provide a simplified explanation in Hindi:"));
        assert!(prompt.contains("Document Text:\nNotice under Section 138\n"));
        assert!(prompt.contains("6. Whether legal consultation is recommended"));
    }

    #[test]
    fn test_truncate_preview_short_text_unchanged() {
        assert_eq!(truncate_preview("short", PREVIEW_CHARS), "short");
        let exact = "a".repeat(PREVIEW_CHARS);
        assert_eq!(truncate_preview(&exact, PREVIEW_CHARS), exact);
    }

    #[test]
    fn test_truncate_preview_long_text() {
        let long = "b".repeat(PREVIEW_CHARS + 1);
        let preview = truncate_preview(&long, PREVIEW_CHARS);
        assert_eq!(preview.len(), PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_truncate_preview_counts_characters_not_bytes() {
        let hindi = "क".repeat(PREVIEW_CHARS + 10);
        let preview = truncate_preview(&hindi, PREVIEW_CHARS);
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
    }
}
