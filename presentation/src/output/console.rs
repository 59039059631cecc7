//! Console output formatter for records and decisions

use colored::Colorize;
use roulette_application::ChooseRestaurantOutput;
use roulette_domain::{ConfigIssue, Person, QuickDecision, Restaurant};
use serde::Serialize;

/// Formats listings and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the people list
    pub fn people(people: &[Person]) -> String {
        if people.is_empty() {
            return format!(
                "{}\n",
                "No people yet. Add someone with `people add <NAME>`.".dimmed()
            );
        }

        let mut output = Self::section_header(&format!("People ({})", people.len()));
        for person in people {
            output.push_str(&format!(
                "  {}  {}\n",
                person.name.bold(),
                person.id.as_str().dimmed()
            ));
        }
        output
    }

    /// Format a restaurant listing.
    ///
    /// When `filtered` is set, a "Showing N of M" line precedes the list.
    pub fn restaurants(restaurants: &[Restaurant], total: usize, filtered: bool) -> String {
        let mut output = String::new();

        if filtered {
            output.push_str(&format!(
                "{}\n",
                format!("Showing {} of {} restaurants", restaurants.len(), total).cyan()
            ));
        }

        if restaurants.is_empty() {
            let hint = if filtered {
                "No restaurants match these filters."
            } else {
                "No restaurants yet. Add one with `restaurants add`."
            };
            output.push_str(&format!("{}\n", hint.dimmed()));
            return output;
        }

        output.push_str(&Self::section_header(&format!(
            "Restaurants ({})",
            restaurants.len()
        )));
        for restaurant in restaurants {
            output.push_str(&Self::restaurant_entry(restaurant));
        }
        output
    }

    pub fn person_added(person: &Person) -> String {
        format!(
            "{} {} {}\n",
            "Added".green(),
            person.name.bold(),
            format!("({})", person.id).dimmed()
        )
    }

    pub fn restaurant_added(restaurant: &Restaurant) -> String {
        format!(
            "{} {}\n    {}\n",
            "Added".green(),
            restaurant.to_string().bold(),
            restaurant.details().dimmed()
        )
    }

    pub fn removed(label: &str) -> String {
        format!("{} {}\n", "Removed".yellow(), label.bold())
    }

    /// Format the outcome of a choose session
    pub fn decision(output: &ChooseRestaurantOutput) -> String {
        let decision = &output.decision;
        let mut text = String::new();

        text.push_str(&Self::header("We have a winner!"));
        text.push('\n');
        text.push_str(&format!(
            "\n{} {}\n",
            "Restaurant:".cyan().bold(),
            decision.restaurant.to_string().green().bold()
        ));
        text.push_str(&format!("  {}\n", decision.restaurant.details()));
        text.push_str(&format!(
            "{} {}\n",
            "Going:".cyan().bold(),
            decision.participant_names()
        ));

        if !output.rejected.is_empty() {
            text.push_str(&format!(
                "{} {}\n",
                "Passed on:".cyan().bold(),
                output
                    .rejected
                    .iter()
                    .map(|r| r.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
                    .dimmed()
            ));
        }

        text.push_str(&format!(
            "{}\n",
            format!("Decided after {} round(s)", output.rounds).dimmed()
        ));
        text.push_str(&format!("\n{}\n", "Enjoy your meal!".bold()));
        text.push_str(&Self::footer());
        text
    }

    /// Format a quick decision
    pub fn quick_decision(drawn: &QuickDecision) -> String {
        format!(
            "{} {} {}\n  {}\n",
            drawn.person.name.bold(),
            "is going to".cyan(),
            drawn.restaurant.to_string().green().bold(),
            drawn.restaurant.details()
        )
    }

    pub fn config_issue(issue: &ConfigIssue) -> String {
        format!("{} {}", "warning:".yellow().bold(), issue.message)
    }

    /// Format any serializable result as pretty JSON
    pub fn json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn restaurant_entry(restaurant: &Restaurant) -> String {
        format!(
            "  {}  {}\n    {}\n",
            restaurant.to_string().bold(),
            restaurant.id.as_str().dimmed(),
            restaurant.details()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(50);
        format!("{}\n{:^50}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(50).cyan())
    }
}
