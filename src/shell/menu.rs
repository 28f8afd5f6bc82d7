//! Main menu actions
//!
//! The action identifiers are plain enum variants; labels and colors are
//! attached here for display only and never compared.

use dialoguer::console::{Color, Style};

/// One of the six main menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CreateAccount,
    Deposit,
    Withdraw,
    AddInterest,
    CheckBalance,
    Exit,
}

impl MenuAction {
    /// All choices, in menu order
    pub const ALL: [MenuAction; 6] = [
        MenuAction::CreateAccount,
        MenuAction::Deposit,
        MenuAction::Withdraw,
        MenuAction::AddInterest,
        MenuAction::CheckBalance,
        MenuAction::Exit,
    ];

    /// Plain label
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::CreateAccount => "🆕 Create Account",
            MenuAction::Deposit => "💰 Deposit",
            MenuAction::Withdraw => "💸 Withdraw",
            MenuAction::AddInterest => "📈 Add Interest",
            MenuAction::CheckBalance => "💼 Check Balance",
            MenuAction::Exit => "🚪 Exit",
        }
    }

    /// Menu color for this choice
    pub fn color(self) -> Color {
        match self {
            MenuAction::CreateAccount => Color::Cyan,
            MenuAction::Deposit => Color::Yellow,
            MenuAction::Withdraw => Color::Magenta,
            MenuAction::AddInterest => Color::Blue,
            MenuAction::CheckBalance => Color::Green,
            MenuAction::Exit => Color::Red,
        }
    }

    /// Label as shown in the menu
    pub fn display_label(self, styled: bool) -> String {
        if styled {
            Style::new().fg(self.color()).apply_to(self.label()).to_string()
        } else {
            self.label().to_string()
        }
    }

    /// Action at a menu index
    pub fn from_index(index: usize) -> Option<MenuAction> {
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_has_six_choices_ending_with_exit() {
        assert_eq!(MenuAction::ALL.len(), 6);
        assert_eq!(MenuAction::ALL[5], MenuAction::Exit);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(MenuAction::from_index(0), Some(MenuAction::CreateAccount));
        assert_eq!(MenuAction::from_index(3), Some(MenuAction::AddInterest));
        assert_eq!(MenuAction::from_index(6), None);
    }

    #[test]
    fn test_plain_label_has_no_escape_codes() {
        assert_eq!(MenuAction::Deposit.display_label(false), "💰 Deposit");
    }
}
