//! Command grammar for the meme bot.
//!
//! Incoming message text is matched against three command shapes and parsed
//! into a closed [`MemeCommand`] variant, keeping the matching logic testable
//! independently of the chat transport.

use regex::Regex;

/// A parsed meme command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemeCommand {
    /// `meme help`: list known aliases
    Help,
    /// `meme add <alias> <templateId>`: register a temporary alias
    Add { alias: String, template_id: String },
    /// `meme [me] <reference> "<top>" "<bottom>"`: render a macro
    Render {
        reference: String,
        top: String,
        bottom: String,
    },
    /// Anything else; the bot stays silent
    Unrecognized,
}

/// Parser for the meme command shapes.
///
/// Patterns are compiled once at construction and tried in order: help, add,
/// render. The first matching shape wins.
pub struct CommandParser {
    help: Regex,
    add: Regex,
    render: Regex,
    template_id: Regex,
}

impl CommandParser {
    pub fn new() -> Self {
        CommandParser {
            help: Regex::new(r"meme help").unwrap(),
            // The trailing boundary keeps a longer uppercase run from being
            // truncated into a valid-looking 32-char id.
            add: Regex::new(r"meme add ([a-z0-9]+) ([A-Z0-9]{32})\b").unwrap(),
            render: Regex::new(r#"meme(?: me)? (\S+) "([^"]*)" "([^"]*)""#).unwrap(),
            template_id: Regex::new(r"^[A-Z0-9]{32}$").unwrap(),
        }
    }

    /// Parse message text into a command.
    pub fn parse(&self, content: &str) -> MemeCommand {
        if self.help.is_match(content) {
            return MemeCommand::Help;
        }

        if let Some(caps) = self.add.captures(content) {
            return MemeCommand::Add {
                alias: caps[1].to_string(),
                template_id: caps[2].to_string(),
            };
        }

        if let Some(caps) = self.render.captures(content) {
            return MemeCommand::Render {
                reference: caps[1].to_string(),
                top: caps[2].to_string(),
                bottom: caps[3].to_string(),
            };
        }

        MemeCommand::Unrecognized
    }

    /// Whether a render reference is itself a well-formed template id
    /// (the full string, not a substring).
    pub fn is_template_id(&self, reference: &str) -> bool {
        self.template_id.is_match(reference)
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_ID: &str = "0123456789ABCDEF0123456789ABCDEF";

    #[test]
    fn test_parse_help() {
        let parser = CommandParser::new();
        assert_eq!(parser.parse("meme help"), MemeCommand::Help);
    }

    #[test]
    fn test_parse_add() {
        let parser = CommandParser::new();

        let cmd = parser.parse(&format!("meme add newalias {}", VALID_ID));
        assert_eq!(
            cmd,
            MemeCommand::Add {
                alias: "newalias".to_string(),
                template_id: VALID_ID.to_string(),
            }
        );
    }

    #[test]
    fn test_add_rejects_uppercase_alias() {
        let parser = CommandParser::new();
        let cmd = parser.parse(&format!("meme add NewAlias {}", VALID_ID));
        assert_eq!(cmd, MemeCommand::Unrecognized);
    }

    #[test]
    fn test_add_rejects_punctuated_alias() {
        let parser = CommandParser::new();
        let cmd = parser.parse(&format!("meme add new-alias {}", VALID_ID));
        assert_eq!(cmd, MemeCommand::Unrecognized);
    }

    #[test]
    fn test_add_rejects_short_id() {
        let parser = CommandParser::new();
        let cmd = parser.parse("meme add newalias 0123456789ABCDEF");
        assert_eq!(cmd, MemeCommand::Unrecognized);
    }

    #[test]
    fn test_add_rejects_overlong_id() {
        let parser = CommandParser::new();
        let cmd = parser.parse(&format!("meme add newalias {}X", VALID_ID));
        assert_eq!(cmd, MemeCommand::Unrecognized);
    }

    #[test]
    fn test_add_rejects_lowercase_id() {
        let parser = CommandParser::new();
        let cmd = parser.parse("meme add newalias 0123456789abcdef0123456789abcdef");
        assert_eq!(cmd, MemeCommand::Unrecognized);
    }

    #[test]
    fn test_parse_render() {
        let parser = CommandParser::new();

        let cmd = parser.parse("meme dlawton \"A\" \"B\"");
        assert_eq!(
            cmd,
            MemeCommand::Render {
                reference: "dlawton".to_string(),
                top: "A".to_string(),
                bottom: "B".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_render_with_me_token() {
        let parser = CommandParser::new();

        let cmd = parser.parse("meme me dlawton \"A\" \"B\"");
        assert_eq!(
            cmd,
            MemeCommand::Render {
                reference: "dlawton".to_string(),
                top: "A".to_string(),
                bottom: "B".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_render_caption_contents() {
        let parser = CommandParser::new();

        let cmd = parser.parse("meme bcat \"I came in to work today\" \"and it's a holiday!\"");
        assert_eq!(
            cmd,
            MemeCommand::Render {
                reference: "bcat".to_string(),
                top: "I came in to work today".to_string(),
                bottom: "and it's a holiday!".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_render_empty_captions() {
        let parser = CommandParser::new();

        let cmd = parser.parse("meme bcat \"\" \"\"");
        assert_eq!(
            cmd,
            MemeCommand::Render {
                reference: "bcat".to_string(),
                top: String::new(),
                bottom: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_render_with_literal_id() {
        let parser = CommandParser::new();

        let cmd = parser.parse(&format!("meme {} \"X\" \"Y\"", VALID_ID));
        assert_eq!(
            cmd,
            MemeCommand::Render {
                reference: VALID_ID.to_string(),
                top: "X".to_string(),
                bottom: "Y".to_string(),
            }
        );
    }

    #[test]
    fn test_render_requires_both_captions() {
        let parser = CommandParser::new();
        assert_eq!(parser.parse("meme dlawton \"A\""), MemeCommand::Unrecognized);
        assert_eq!(parser.parse("meme dlawton"), MemeCommand::Unrecognized);
    }

    #[test]
    fn test_unrelated_chatter_is_unrecognized() {
        let parser = CommandParser::new();
        assert_eq!(
            parser.parse("good morning everyone"),
            MemeCommand::Unrecognized
        );
        assert_eq!(parser.parse("meme"), MemeCommand::Unrecognized);
    }

    #[test]
    fn test_is_template_id_full_match_only() {
        let parser = CommandParser::new();

        assert!(parser.is_template_id(VALID_ID));
        assert!(!parser.is_template_id("dlawton"));
        assert!(!parser.is_template_id(&format!("{}X", VALID_ID)));
        assert!(!parser.is_template_id(&VALID_ID[..31]));
    }
}
