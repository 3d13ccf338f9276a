//! Bot command list parsing.
//!
//! Reads the `command - description` format BotFather uses for `/setcommands`.

use teloxide::types::BotCommand;

/// Parse one `command - description` pair per line.
///
/// The line is split at the first `-`, so descriptions may contain dashes.
/// Lines without a dash or without a command are skipped.
pub fn parse_commands(input: &str) -> Vec<BotCommand> {
    input
        .lines()
        .filter_map(|line| {
            let (command, description) = line.split_once('-')?;
            let command = command.trim();
            if command.is_empty() {
                return None;
            }
            Some(BotCommand::new(command, description.trim()))
        })
        .collect()
}

/// Render commands back into the `command - description` format.
pub fn format_commands(commands: &[BotCommand]) -> String {
    commands
        .iter()
        .map(|cmd| format!("{} - {}", cmd.command, cmd.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(commands: &[BotCommand]) -> Vec<(&str, &str)> {
        commands
            .iter()
            .map(|cmd| (cmd.command.as_str(), cmd.description.as_str()))
            .collect()
    }

    #[test]
    fn test_parse_commands() {
        let commands = parse_commands("start - Start the bot\nhelp - Show help message");
        assert_eq!(
            pairs(&commands),
            vec![("start", "Start the bot"), ("help", "Show help message")]
        );
    }

    #[test]
    fn test_parse_commands_keeps_dashes_in_description() {
        let commands = parse_commands("test - This is a - test description");
        assert_eq!(pairs(&commands), vec![("test", "This is a - test description")]);
    }

    #[test]
    fn test_parse_commands_skips_invalid_lines() {
        let commands = parse_commands("start - Start\ninvalid\n - no command\nhelp - Help");
        assert_eq!(pairs(&commands), vec![("start", "Start"), ("help", "Help")]);
    }

    #[test]
    fn test_parse_commands_trims() {
        let commands = parse_commands("  start  -  Start the bot  \r\n");
        assert_eq!(pairs(&commands), vec![("start", "Start the bot")]);
    }

    #[test]
    fn test_parse_commands_empty() {
        assert!(parse_commands("").is_empty());
    }

    #[test]
    fn test_format_commands() {
        let text = "start - Start the bot\nhelp - Show help";
        assert_eq!(format_commands(&parse_commands(text)), text);
    }
}
