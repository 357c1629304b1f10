//! Conditional query clauses
//!
//! List pages take optional filters from the query string. Instead of gluing
//! SQL strings together in handlers, each optional filter becomes a [`Filter`]
//! in a [`FilterSet`], which writes the `WHERE` and `HAVING` fragments into a
//! `sqlx::QueryBuilder`. Every value goes through `push_bind`.

use sqlx::{QueryBuilder, Sqlite};

/// One optional clause of a list query
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring match: `LOWER(column) LIKE LOWER('%term%')`
    Contains { column: &'static str, term: String },
    /// Exact id match: `column = value`
    IdEquals { column: &'static str, value: i64 },
    /// Dish does not have a `Contains` row for the allergen
    ExcludesAllergen { dish_column: &'static str, allergen_id: i64 },
    /// Aggregate lower bound: `COALESCE(expr, 0) >= value`, applied after grouping
    AtLeast { aggregate: &'static str, value: f64 },
}

impl Filter {
    fn is_aggregate(&self) -> bool {
        matches!(self, Filter::AtLeast { .. })
    }

    fn write(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        match self {
            Filter::Contains { column, term } => {
                builder
                    .push(format!("LOWER({column}) LIKE LOWER("))
                    .push_bind(format!("%{term}%"))
                    .push(")");
            }
            Filter::IdEquals { column, value } => {
                builder.push(format!("{column} = ")).push_bind(*value);
            }
            Filter::ExcludesAllergen {
                dish_column,
                allergen_id,
            } => {
                builder
                    .push(format!(
                        "{dish_column} NOT IN (SELECT dish_id FROM Contains WHERE allergen_id = "
                    ))
                    .push_bind(*allergen_id)
                    .push(")");
            }
            Filter::AtLeast { aggregate, value } => {
                builder
                    .push(format!("COALESCE({aggregate}, 0) >= "))
                    .push_bind(*value);
            }
        }
    }
}

/// Ordered collection of optional clauses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause
    pub fn push(&mut self, filter: Filter) -> &mut Self {
        self.filters.push(filter);
        self
    }

    /// Add a substring clause unless the trimmed term is empty
    pub fn contains(&mut self, column: &'static str, term: Option<&str>) -> &mut Self {
        if let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) {
            self.push(Filter::Contains {
                column,
                term: term.to_string(),
            });
        }
        self
    }

    /// Write ` WHERE a AND b` for the row-level clauses, if any
    pub fn write_where(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        self.write_clause(builder, " WHERE ", |f| !f.is_aggregate());
    }

    /// Write ` HAVING a AND b` for the aggregate clauses, if any
    pub fn write_having(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        self.write_clause(builder, " HAVING ", Filter::is_aggregate);
    }

    fn write_clause(
        &self,
        builder: &mut QueryBuilder<'_, Sqlite>,
        keyword: &str,
        select: impl Fn(&Filter) -> bool,
    ) {
        let mut first = true;
        for filter in self.filters.iter().filter(|f| select(*f)) {
            builder.push(if first { keyword } else { " AND " });
            filter.write(builder);
            first = false;
        }
    }
}
