//! Virtual-clock task scheduler
//!
//! Timers are keyed by simulation time, not wall-clock time, and are polled
//! once per tick. Firing order is by due time, then by arming order.

/// Handle for cancelling an armed timer
pub type TimerId = u32;

/// Work a timer performs when it comes due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Spawn the next obstacle (repeating)
    SpawnObstacle,
    /// Slam the player back down after a trap launch (one-shot)
    TrapRecovery,
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    task: Task,
    due_ms: f64,
    /// Some = repeating with this period
    period_ms: Option<f64>,
}

/// Pending timers plus the virtual clock they are measured against
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: f64,
    timers: Vec<Timer>,
    next_id: TimerId,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Arm a one-shot timer
    pub fn after(&mut self, delay_ms: f64, task: Task) -> TimerId {
        self.arm(delay_ms, task, None)
    }

    /// Arm a repeating timer; first fire is one period from now
    pub fn every(&mut self, period_ms: f64, task: Task) -> TimerId {
        // A zero period would fire forever within a single poll
        let period_ms = period_ms.max(1.0);
        self.arm(period_ms, task, Some(period_ms))
    }

    fn arm(&mut self, delay_ms: f64, task: Task, period_ms: Option<f64>) -> TimerId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.timers.push(Timer {
            id,
            task,
            due_ms: self.now_ms + delay_ms.max(0.0),
            period_ms,
        });
        id
    }

    /// Remove a timer. Returns false if it already fired or was never armed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Drop every pending timer (the clock keeps running)
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Number of pending timers for a task
    pub fn pending(&self, task: Task) -> usize {
        self.timers.iter().filter(|t| t.task == task).count()
    }

    /// Advance the clock and return every task that came due, in firing order.
    ///
    /// A repeating timer that fell more than one period behind fires once per
    /// elapsed period.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<Task> {
        self.now_ms += dt_ms.max(0.0);

        let mut fired = Vec::new();
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due_ms <= self.now_ms)
                .min_by(|(_, a), (_, b)| {
                    a.due_ms
                        .partial_cmp(&b.due_ms)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then(a.id.cmp(&b.id))
                })
                .map(|(i, _)| i);

            let Some(index) = next else {
                break;
            };

            let timer = &mut self.timers[index];
            fired.push(timer.task);
            match timer.period_ms {
                Some(period) => timer.due_ms += period,
                None => {
                    self.timers.remove(index);
                }
            }
        }
        fired
    }
}
