//! Menu options and their parsing.

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ListProducts,
    AddToCart,
    ViewCart,
    Checkout,
    ViewBalance,
    Exit,
}

impl MenuOption {
    /// All options in the order they are printed.
    pub const ALL: [MenuOption; 6] = [
        MenuOption::ListProducts,
        MenuOption::AddToCart,
        MenuOption::ViewCart,
        MenuOption::Checkout,
        MenuOption::ViewBalance,
        MenuOption::Exit,
    ];

    /// Parses a menu choice. Anything other than `0`-`5` is `None`.
    pub fn parse(raw: &str) -> Option<MenuOption> {
        match raw.trim() {
            "1" => Some(MenuOption::ListProducts),
            "2" => Some(MenuOption::AddToCart),
            "3" => Some(MenuOption::ViewCart),
            "4" => Some(MenuOption::Checkout),
            "5" => Some(MenuOption::ViewBalance),
            "0" => Some(MenuOption::Exit),
            _ => None,
        }
    }

    /// The key the user types for this option.
    pub fn key(&self) -> char {
        match self {
            MenuOption::ListProducts => '1',
            MenuOption::AddToCart => '2',
            MenuOption::ViewCart => '3',
            MenuOption::Checkout => '4',
            MenuOption::ViewBalance => '5',
            MenuOption::Exit => '0',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::ListProducts => "View products",
            MenuOption::AddToCart => "Add to cart",
            MenuOption::ViewCart => "View cart",
            MenuOption::Checkout => "Checkout",
            MenuOption::ViewBalance => "View balance",
            MenuOption::Exit => "Exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_options() {
        assert_eq!(MenuOption::parse("1"), Some(MenuOption::ListProducts));
        assert_eq!(MenuOption::parse(" 4\n"), Some(MenuOption::Checkout));
        assert_eq!(MenuOption::parse("0"), Some(MenuOption::Exit));
    }

    #[test]
    fn test_parse_unknown_options() {
        for raw in ["", "6", "-1", "01", "one", "1 2"] {
            assert_eq!(MenuOption::parse(raw), None, "'{}' should not parse", raw);
        }
    }

    #[test]
    fn test_keys_round_trip() {
        for option in MenuOption::ALL {
            assert_eq!(MenuOption::parse(&option.key().to_string()), Some(option));
        }
    }
}
