use engine::{Notification, Summary};

pub(crate) const HELP: &str = "\
Commands: register/login <user> <pass>, add <income|expense> <cat> <amt>, \
set/edit budget <cat> <amt>, stats [categories <cats>], transfer <to> <amt>, \
export/import <file>, list categories, logout, help, exit.
Examples: 'add expense food 1000', 'stats categories food transport', 'set budget food 4000'.";

const NOT_AVAILABLE: &str = "N/A";

pub(crate) fn notifications(notes: &[Notification]) -> String {
    notes.iter().map(|note| format!("{note}\n")).collect()
}

/// Totals, the per-category table and trailing notifications.
pub(crate) fn summary(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total income: {}\n", summary.total_income));
    out.push_str(&format!("Total expenses: {}\n", summary.total_expenses));
    out.push_str("| Category | Income | Expense | Budget | Remaining |\n");
    for row in &summary.rows {
        let (budget, remaining) = match row.budget {
            Some(budget) => (budget.to_string(), row.remaining.to_string()),
            None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
        };
        out.push_str(&format!(
            "| {:<8} | {:<6} | {:<7} | {:<6} | {:<9} |\n",
            row.category, row.income, row.expense, budget, remaining
        ));
    }
    out.push_str(&notifications(&summary.notifications));
    out
}

#[cfg(test)]
mod tests {
    use engine::{Engine, MoneyCents};

    use super::*;

    #[test]
    fn table_shows_budget_or_not_available() {
        let engine = Engine::builder().build();
        engine.register("alice", "pw").unwrap();
        let mut session = engine.login("alice", "pw").unwrap();
        engine
            .income(&mut session, "salary", MoneyCents::from_major(100))
            .unwrap();
        engine
            .set_budget(&mut session, "food", MoneyCents::from_major(50))
            .unwrap();
        engine
            .expense(&mut session, "food", MoneyCents::from_major(20))
            .unwrap();

        let text = summary(&session.wallet().summary::<&str>(&[]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Total income: 100.00");
        assert_eq!(lines[1], "Total expenses: 20.00");
        assert_eq!(lines[2], "| Category | Income | Expense | Budget | Remaining |");
        assert_eq!(lines[3], "| food     | 0.00   | 20.00   | 50.00  | 30.00     |");
        assert_eq!(lines[4], "| salary   | 100.00 | 0.00    | N/A    | N/A       |");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn overspending_adds_alert_line() {
        let engine = Engine::builder().build();
        engine.register("bob", "pw").unwrap();
        let mut session = engine.login("bob", "pw").unwrap();
        engine
            .expense(&mut session, "food", MoneyCents::from_major(10))
            .unwrap();

        let text = summary(&session.wallet().summary::<&str>(&[]));
        assert!(text.ends_with("Alert: Expenses exceed income!\n"));
    }
}
