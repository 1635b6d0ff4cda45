//! Derived statistics over training collections.
//!
//! Pure aggregation only; the chart that consumes these values lives in
//! the presentation layer.

use crate::trainings::Training;

/// Total training minutes for one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityMinutes {
    pub activity: String,
    pub minutes: i64,
}

/// Sum training minutes per activity, in first-appearance order.
pub fn minutes_by_activity(trainings: &[Training]) -> Vec<ActivityMinutes> {
    let mut totals: Vec<ActivityMinutes> = Vec::new();

    for training in trainings {
        match totals
            .iter_mut()
            .find(|entry| entry.activity == training.activity)
        {
            Some(entry) => entry.minutes += training.duration,
            None => totals.push(ActivityMinutes {
                activity: training.activity.clone(),
                minutes: training.duration,
            }),
        }
    }

    totals
}
