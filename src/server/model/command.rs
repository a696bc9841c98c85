use serenity::all::CommandOptionType;

/// Who may see and use a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    /// Requires the admin role.
    Admin,
}

#[derive(Debug, Clone, Copy)]
pub struct CommandOption {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandOptionType,
    pub required: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub options: &'static [CommandOption],
    pub visibility: Visibility,
}

const USERNAME_OPTION: CommandOption = CommandOption {
    name: "username",
    description: "Enter your username",
    kind: CommandOptionType::String,
    required: true,
};

const PASSWORD_OPTION: CommandOption = CommandOption {
    name: "password",
    description: "Enter your password",
    kind: CommandOptionType::String,
    required: true,
};

/// Every slash command the bot registers, in help order.
pub const COMMANDS: &[CommandDefinition] = &[
    CommandDefinition {
        name: "help",
        description: "Displays this help information",
        options: &[],
        visibility: Visibility::Public,
    },
    CommandDefinition {
        name: "register",
        description: "Use the current Discord account to register an ADNF account",
        options: &[USERNAME_OPTION, PASSWORD_OPTION],
        visibility: Visibility::Public,
    },
    CommandDefinition {
        name: "link",
        description: "Link your Discord account to ADNF",
        options: &[USERNAME_OPTION, PASSWORD_OPTION],
        visibility: Visibility::Public,
    },
    CommandDefinition {
        name: "relink",
        description: "Link your Discord account to a different ADNF account",
        options: &[USERNAME_OPTION, PASSWORD_OPTION],
        visibility: Visibility::Public,
    },
    CommandDefinition {
        name: "mention",
        description: "Mention a member on behalf of the staff team",
        // Not required so a missing target reaches the handler's own validation.
        options: &[CommandOption {
            name: "user",
            description: "The member to mention",
            kind: CommandOptionType::User,
            required: false,
        }],
        visibility: Visibility::Admin,
    },
];

/// Commands the interaction router knows how to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Register,
    Link,
    Relink,
    Mention,
}

impl Command {
    /// Exact, case-sensitive match on the command name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "help" => Some(Self::Help),
            "register" => Some(Self::Register),
            "link" => Some(Self::Link),
            "relink" => Some(Self::Relink),
            "mention" => Some(Self::Mention),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Register => "register",
            Self::Link => "link",
            Self::Relink => "relink",
            Self::Mention => "mention",
        }
    }
}
