use super::views::{BenchmarkEntry, CategoryShareEntry, FootprintInsights, MetricExplanations};
use super::{METRIC_EXPLANATIONS, PERU_AVERAGE_GHA, WORLD_AVERAGE_GHA};
use crate::quiz::category::Category;
use crate::quiz::scoring::{round_to, CalculationResult};
use serde::Serialize;

/// Presentation-neutral view of a result, ready for charts or a printed report.
#[derive(Debug, Clone, Serialize)]
pub struct FootprintReport {
    pub result: CalculationResult,
    pub category_shares: Vec<CategoryShareEntry>,
    pub benchmarks: Vec<BenchmarkEntry>,
    pub insights: FootprintInsights,
    pub metric_explanations: MetricExplanations,
}

impl FootprintReport {
    pub fn new(result: &CalculationResult, biocapacity_per_person: f64) -> Self {
        let category_shares = category_shares(result);
        let benchmarks = vec![
            BenchmarkEntry {
                label: "Perú",
                gha: PERU_AVERAGE_GHA,
            },
            BenchmarkEntry {
                label: "Mundo",
                gha: WORLD_AVERAGE_GHA,
            },
            BenchmarkEntry {
                label: "Tú",
                gha: result.total_gha,
            },
        ];
        let insights = super::generate_insights(result, &category_shares, biocapacity_per_person);

        Self {
            result: result.clone(),
            category_shares,
            benchmarks,
            insights,
            metric_explanations: METRIC_EXPLANATIONS,
        }
    }

    pub fn share_of(&self, category: Category) -> Option<&CategoryShareEntry> {
        self.category_shares
            .iter()
            .find(|entry| entry.category == category)
    }
}

fn category_shares(result: &CalculationResult) -> Vec<CategoryShareEntry> {
    Category::ordered()
        .into_iter()
        .map(|category| {
            let gha = result.subtotal(category);
            let share_pct = if result.total_gha > 0.0 {
                round_to(gha / result.total_gha * 100.0, 1)
            } else {
                0.0
            };

            CategoryShareEntry {
                category,
                category_label: category.label(),
                description: category.description(),
                gha,
                share_pct,
            }
        })
        .collect()
}
