use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub duration: Duration,
}

/// Named step durations collected while processing one frame.
#[derive(Debug, Default, Clone)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
    step_map: HashMap<String, Duration>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: impl Into<String>, duration: Duration) {
        let name = name.into();
        self.steps.push(StepTiming {
            name: name.clone(),
            duration,
        });
        *self.step_map.entry(name).or_insert(Duration::ZERO) += duration;
    }

    /// Merge another set of timings, keeping step order.
    pub fn extend(&mut self, other: &PipelineTimings) {
        for step in other.steps() {
            self.add_step(step.name.clone(), step.duration);
        }
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Accumulated duration of every step recorded under `name`.
    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.step_map.get(name).copied()
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn print_summary(&self) {
        let total = self.total_duration();
        println!("\nPipeline Timing Summary:");
        println!("{:-<60}", "");
        for (name, duration) in self.aggregated() {
            let percentage = if total.as_secs_f64() > 0.0 {
                (duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            } else {
                0.0
            };
            println!(
                "{:<30} {:>12.3}ms ({:>5.1}%)",
                name,
                duration.as_secs_f64() * 1000.0,
                percentage
            );
        }
        println!("{:-<60}", "");
        println!(
            "{:<30} {:>12.3}ms",
            "Total",
            total.as_secs_f64() * 1000.0
        );
    }

    // First-seen order, one line per step name.
    fn aggregated(&self) -> Vec<(&str, Duration)> {
        let mut seen: Vec<&str> = Vec::new();
        for step in &self.steps {
            if !seen.contains(&step.name.as_str()) {
                seen.push(step.name.as_str());
            }
        }
        seen.into_iter()
            .map(|name| (name, self.step_map[name]))
            .collect()
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }
}
