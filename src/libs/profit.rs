//! Period profit: client income from billable hours against staff cost and
//! manual income and expense lines.
//!
//! ```text
//! income hours  = billable hours on selected projects + extra hours
//! cost hours    = all hours + extra hours
//! client income = Σ income hours × client rate
//! staff cost    = Σ cost hours × user rate
//! profit        = client income + other income - staff cost - other expenses
//! ```

use super::duration::duration_to_hours;
use super::entry::EntryRecord;
use super::error::InputError;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

/// Which projects count towards client income.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectSelection {
    #[default]
    All,
    Only(HashSet<i64>),
}

impl ProjectSelection {
    /// An empty id list means every project.
    pub fn from_ids(ids: &[i64]) -> Self {
        if ids.is_empty() {
            ProjectSelection::All
        } else {
            ProjectSelection::Only(ids.iter().copied().collect())
        }
    }

    /// Like [`from_ids`](Self::from_ids), but a selection covering every
    /// known project is also `All`, so entries without a project still count.
    pub fn resolve(ids: &[i64], all_projects: &[i64]) -> Self {
        let covers_all = !all_projects.is_empty() && all_projects.iter().all(|id| ids.contains(id));
        if covers_all {
            ProjectSelection::All
        } else {
            ProjectSelection::from_ids(ids)
        }
    }

    pub fn includes(&self, project_id: Option<i64>) -> bool {
        match self {
            ProjectSelection::All => true,
            ProjectSelection::Only(ids) => project_id.is_some_and(|id| ids.contains(&id)),
        }
    }
}

/// A manual income or expense line, `DESCRIPTION=AMOUNT` on the command line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub description: String,
    pub amount: f64,
}

impl FromStr for LineItem {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (description, amount) = s.rsplit_once('=').ok_or_else(|| InputError::MissingSeparator(s.to_string()))?;
        let amount = amount.trim().parse::<f64>().map_err(|_| InputError::InvalidNumber {
            input: s.to_string(),
            value: amount.to_string(),
        })?;
        Ok(LineItem {
            description: description.trim().to_string(),
            amount: if amount.is_finite() { amount } else { 0.0 },
        })
    }
}

/// `USER_ID=VALUE`, used for cost rates and extra hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserValue {
    pub user_id: i64,
    pub value: f64,
}

impl FromStr for UserValue {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, value) = s.split_once('=').ok_or_else(|| InputError::MissingSeparator(s.to_string()))?;
        let user_id = id.trim().parse::<i64>().map_err(|_| InputError::InvalidId {
            input: s.to_string(),
            value: id.to_string(),
        })?;
        let value = value.trim().parse::<f64>().map_err(|_| InputError::InvalidNumber {
            input: s.to_string(),
            value: value.to_string(),
        })?;
        Ok(UserValue { user_id, value })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfitInput {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    /// Selected users as `(id, display name)`.
    pub users: Vec<(i64, String)>,
    pub projects: ProjectSelection,
    /// Names of the income projects; empty when every project counts.
    pub project_names: Vec<String>,
    pub client_rate: f64,
    pub user_rates: BTreeMap<i64, f64>,
    pub extra_hours: Vec<UserValue>,
    pub other_incomes: Vec<LineItem>,
    pub expenses: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfit {
    pub user_id: i64,
    pub name: String,
    pub income_hours: f64,
    pub cost_hours: f64,
    pub rate: f64,
    pub income: f64,
    pub cost: f64,
    pub net: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitReport {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub client_rate: f64,
    pub project_names: Vec<String>,
    pub users: Vec<UserProfit>,
    pub other_incomes: Vec<LineItem>,
    pub expenses: Vec<LineItem>,
    pub client_income: f64,
    pub other_income: f64,
    pub total_income: f64,
    pub staff_cost: f64,
    pub other_expenses: f64,
    pub total_expenses: f64,
    pub profit: f64,
}

impl ProfitReport {
    pub fn calculate(input: &ProfitInput, entries: &[EntryRecord]) -> Self {
        let mut extra_by_user: BTreeMap<i64, f64> = BTreeMap::new();
        for extra in &input.extra_hours {
            if !extra.value.is_finite() || extra.value <= 0.0 {
                continue;
            }
            *extra_by_user.entry(extra.user_id).or_insert(0.0) += extra.value;
        }

        let users: Vec<UserProfit> = input
            .users
            .iter()
            .map(|(user_id, name)| {
                let extra = extra_by_user.get(user_id).copied().unwrap_or(0.0);
                let mut income_hours = extra;
                let mut cost_hours = extra;

                for entry in entries.iter().filter(|entry| entry.user_id == *user_id) {
                    let hours = duration_to_hours(entry.duration.as_deref().unwrap_or(""));
                    cost_hours += hours;
                    if entry.billable && input.projects.includes(entry.project_id) {
                        income_hours += hours;
                    }
                }

                let rate = input.user_rates.get(user_id).copied().filter(|r| r.is_finite()).unwrap_or(0.0);
                let income = income_hours * input.client_rate;
                let cost = cost_hours * rate;

                UserProfit {
                    user_id: *user_id,
                    name: name.clone(),
                    income_hours,
                    cost_hours,
                    rate,
                    income,
                    cost,
                    net: income - cost,
                }
            })
            .collect();

        let client_income = users.iter().map(|user| user.income_hours).sum::<f64>() * input.client_rate;
        let other_income = input.other_incomes.iter().map(|item| item.amount).sum::<f64>();
        let staff_cost = users.iter().map(|user| user.cost).sum::<f64>();
        let other_expenses = input.expenses.iter().map(|item| item.amount).sum::<f64>();
        let total_income = client_income + other_income;
        let total_expenses = staff_cost + other_expenses;

        ProfitReport {
            date_from: input.date_from,
            date_to: input.date_to,
            client_rate: input.client_rate,
            project_names: input.project_names.clone(),
            users,
            other_incomes: input.other_incomes.clone(),
            expenses: input.expenses.clone(),
            client_income,
            other_income,
            total_income,
            staff_cost,
            other_expenses,
            total_expenses,
            profit: total_income - total_expenses,
        }
    }

    pub fn projects_label(&self) -> String {
        if self.project_names.is_empty() {
            "All projects".to_string()
        } else {
            self.project_names.join(", ")
        }
    }

    pub fn total_income_hours(&self) -> f64 {
        self.users.iter().map(|user| user.income_hours).sum()
    }

    pub fn total_cost_hours(&self) -> f64 {
        self.users.iter().map(|user| user.cost_hours).sum()
    }
}
