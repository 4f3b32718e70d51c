use services::DashboardPanel;

use crate::vm::number_fmt::{format_percent, to_fixed_1};
use crate::vm::time_fmt::format_datetime;

/// Dashboard strings, ready to bind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardVm {
    pub greeting: Option<String>,
    pub completion: String,
    pub average_score: String,
    pub completed_topics: String,
    pub total_topics: String,
    pub progress_chart: Option<String>,
    pub performance_chart: Option<String>,
    pub recent_attempts: Vec<AttemptRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptRowVm {
    pub score: String,
    pub completed_at: String,
}

impl From<&DashboardPanel> for DashboardVm {
    fn from(panel: &DashboardPanel) -> Self {
        let mut vm = DashboardVm {
            greeting: panel
                .user
                .as_ref()
                .map(|user| format!("Welcome back, {}!", user.display_name())),
            progress_chart: panel.progress_chart.clone(),
            performance_chart: panel.performance_chart.clone(),
            recent_attempts: panel
                .recent_attempts
                .iter()
                .map(|attempt| AttemptRowVm {
                    score: format!("{}%", to_fixed_1(attempt.score)),
                    completed_at: attempt
                        .completed_at
                        .map(format_datetime)
                        .unwrap_or_default(),
                })
                .collect(),
            ..DashboardVm::default()
        };
        if let Some(summary) = &panel.summary {
            vm.completion = format_percent(summary.completion_percentage);
            vm.average_score = format_percent(summary.average_score);
            vm.completed_topics = summary.completed_topics.to_string();
            vm.total_topics = summary.total_topics.to_string();
        }
        vm
    }
}
