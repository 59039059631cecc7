//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use roulette_domain::{FilterCriteria, NewRestaurant, OutputFormat, PriceTier, Rating};
use std::path::PathBuf;

/// Output format for listings and results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for lunch-roulette
#[derive(Parser, Debug)]
#[command(name = "lunch-roulette")]
#[command(author, version, about = "Let the group randomly pick where to eat")]
#[command(long_about = r#"
Lunch Roulette keeps a list of people and a list of restaurants, draws a
random restaurant for whoever is going, and asks each of them in turn to
accept or reject it. A single rejection puts the restaurant aside for the
rest of the session and the next one is drawn.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./roulette.toml       Project-level config
3. ~/.config/lunch-roulette/config.toml   Global config

Example:
  lunch-roulette people add "Alice"
  lunch-roulette restaurants add --name "Pizza Place" --style Italian --area Downtown --rating 4 --delivery
  lunch-roulette choose --who Alice --who Bob --min-rating 4
  lunch-roulette quick
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress messages during a session
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Directory holding people.json and restaurants.json (":memory:" for a throwaway store)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<String>,

    /// Output format (overrides [output] format)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormatArg>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage the people list
    People {
        #[command(subcommand)]
        action: PeopleCommand,
    },
    /// Manage the restaurant list
    Restaurants {
        #[command(subcommand)]
        action: RestaurantsCommand,
    },
    /// Draw restaurants for a group until everyone accepts one
    Choose(ChooseArgs),
    /// Draw one random person and one random restaurant
    Quick,
    /// Show configuration file locations and the effective settings
    Config,
}

#[derive(Subcommand, Debug)]
pub enum PeopleCommand {
    /// List everyone
    List,
    /// Add a person
    Add {
        /// Capitalised name, letters and spaces only
        name: String,
    },
    /// Remove a person by id
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
pub enum RestaurantsCommand {
    /// List restaurants, optionally filtered
    List(FilterArgs),
    /// Add a restaurant
    Add(RestaurantArgs),
    /// Remove a restaurant by id
    Remove { id: String },
}

/// Yes/no for the delivery filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Delivery {
    Yes,
    No,
}

/// Filter flags shared by `restaurants list` and `choose`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Style/cuisine contains this text
    #[arg(long)]
    pub style: Option<String>,

    /// Exact price tier ($ to $$$$$, or 1 to 5)
    #[arg(long)]
    pub price: Option<PriceTier>,

    /// Offers delivery
    #[arg(long, value_enum)]
    pub delivery: Option<Delivery>,

    /// Area contains this text
    #[arg(long)]
    pub area: Option<String>,

    /// Minimum rating
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub min_rating: Option<u8>,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            style_contains: self.style.clone(),
            price_equals: self.price,
            delivery_equals: self.delivery.map(|d| d == Delivery::Yes),
            area_contains: self.area.clone(),
            min_rating: self.min_rating,
        }
    }
}

/// Fields for `restaurants add`
#[derive(Args, Debug, Clone)]
pub struct RestaurantArgs {
    #[arg(long)]
    pub name: String,

    /// Style/cuisine, no digits
    #[arg(long)]
    pub style: String,

    /// Price tier ($ to $$$$$, or 1 to 5)
    #[arg(long, default_value = "$$")]
    pub price: PriceTier,

    /// Area or address, at least 5 characters
    #[arg(long)]
    pub area: String,

    /// Rating from 1 to 5
    #[arg(long, default_value = "3")]
    pub rating: Rating,

    /// Offers delivery
    #[arg(long)]
    pub delivery: bool,
}

impl From<RestaurantArgs> for NewRestaurant {
    fn from(args: RestaurantArgs) -> Self {
        NewRestaurant {
            name: args.name,
            style: args.style,
            price: args.price,
            delivery: args.delivery,
            area: args.area,
            rating: args.rating,
        }
    }
}

/// Vote automatically instead of prompting
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AutoVote {
    /// Everyone accepts the first draw
    Accept,
    /// Everyone rejects every draw
    Reject,
}

#[derive(Args, Debug, Clone)]
pub struct ChooseArgs {
    /// Who is going, by name or id (repeatable)
    #[arg(long = "who", value_name = "NAME|ID", required = true, num_args = 1..)]
    pub who: Vec<String>,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Skip the prompt and cast every vote this way
    #[arg(long, value_enum)]
    pub auto: Option<AutoVote>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_choose_with_filters() {
        let cli = Cli::try_parse_from([
            "lunch-roulette",
            "choose",
            "--who",
            "Alice",
            "--who",
            "Bob",
            "--style",
            "ital",
            "--delivery",
            "yes",
            "--min-rating",
            "4",
        ])
        .unwrap();

        let Command::Choose(args) = cli.command else {
            panic!("expected choose");
        };
        assert_eq!(args.who, vec!["Alice", "Bob"]);
        let criteria = args.filters.to_criteria();
        assert_eq!(criteria.style_contains.as_deref(), Some("ital"));
        assert_eq!(criteria.delivery_equals, Some(true));
        assert_eq!(criteria.min_rating, Some(4));
        assert!(args.auto.is_none());
    }

    #[test]
    fn test_choose_requires_participants() {
        assert!(Cli::try_parse_from(["lunch-roulette", "choose"]).is_err());
    }

    #[test]
    fn test_min_rating_out_of_range() {
        assert!(
            Cli::try_parse_from(["lunch-roulette", "restaurants", "list", "--min-rating", "6"])
                .is_err()
        );
    }

    #[test]
    fn test_restaurant_add_defaults() {
        let cli = Cli::try_parse_from([
            "lunch-roulette",
            "restaurants",
            "add",
            "--name",
            "Sushi Bar",
            "--style",
            "Japanese",
            "--area",
            "Midtown",
        ])
        .unwrap();

        let Command::Restaurants {
            action: RestaurantsCommand::Add(args),
        } = cli.command
        else {
            panic!("expected restaurants add");
        };
        let input = NewRestaurant::from(args);
        assert_eq!(input.price, PriceTier::Two);
        assert_eq!(input.rating.stars(), 3);
        assert!(!input.delivery);
    }

    #[test]
    fn test_price_accepts_tier_number() {
        let cli = Cli::try_parse_from(["lunch-roulette", "restaurants", "list", "--price", "3"])
            .unwrap();
        let Command::Restaurants {
            action: RestaurantsCommand::List(filters),
        } = cli.command
        else {
            panic!("expected restaurants list");
        };
        assert_eq!(filters.price, Some(PriceTier::Three));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lunch-roulette", "quick", "-vv", "--output", "json"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormatArg::Json));
    }
}
