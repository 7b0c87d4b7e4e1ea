use crate::model::{Status, Task, TaskFilter};
use crate::service::TaskPage;
use crate::stats::Stats;

/// In-memory mirror of the last-fetched task list and aggregate counts,
/// scoped to one filter selection.
///
/// Each `apply_*` method is the delta rule for one acknowledged mutation
/// kind, keeping the cached view numerically consistent with the server
/// without a full re-fetch. Callers must only apply a delta for a mutation
/// that succeeded; a failed request leaves the cache exactly as it was.
///
/// The deltas only account for mutations this cache observed. Concurrent
/// sessions can diverge the view until the next wholesale [`refresh`], which
/// is why a filter change reports that a fresh `list()` is required.
///
/// [`refresh`]: TaskCache::refresh
#[derive(Debug, Default)]
pub struct TaskCache {
    tasks: Vec<Task>,
    stats: Stats,
    filter: TaskFilter,
}

impl TaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Switch the active filter. Returns true when the filter actually
    /// changed, in which case the locally-applied deltas are no longer
    /// trustworthy and the caller must refresh from an authoritative list.
    pub fn set_filter(&mut self, filter: TaskFilter) -> bool {
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        true
    }

    /// Replace the cached view wholesale with an authoritative page,
    /// discarding accumulated deltas.
    pub fn refresh(&mut self, page: TaskPage) {
        self.tasks = page.tasks;
        self.stats = page.stats;
    }

    /// Acknowledged create: prepend (new tasks sort first) and bump
    /// total/pending, since creation always starts pending.
    pub fn apply_created(&mut self, task: Task) {
        self.tasks.insert(0, task);
        self.stats.total += 1;
        self.stats.pending += 1;
    }

    /// Acknowledged non-status update: swap in the server-returned record.
    /// Counts are untouched. Overlapping in-flight updates are not
    /// coalesced; the last response to arrive wins.
    pub fn apply_updated(&mut self, task: Task) {
        self.replace(task);
    }

    /// Acknowledged status change: swap in the server-returned record and
    /// move one count between completed and pending. The move happens only
    /// when the status actually changed from the cached record, so a
    /// same-status ack cannot drift the counters.
    pub fn apply_status(&mut self, task: Task) {
        let previous = self
            .tasks
            .iter()
            .find(|t| t.id == task.id)
            .map(|t| t.status);
        if previous.is_some_and(|prev| prev != task.status) {
            match task.status {
                Status::Completed => {
                    self.stats.completed += 1;
                    self.stats.pending = self.stats.pending.saturating_sub(1);
                }
                Status::Pending => {
                    self.stats.pending += 1;
                    self.stats.completed = self.stats.completed.saturating_sub(1);
                }
            }
        }
        self.replace(task);
    }

    /// Acknowledged delete: drop the record and decrement the bucket its
    /// last-known status was counted in.
    pub fn apply_deleted(&mut self, id: &str) {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return;
        };
        let removed = self.tasks.remove(pos);
        self.stats.total = self.stats.total.saturating_sub(1);
        match removed.status {
            Status::Completed => {
                self.stats.completed = self.stats.completed.saturating_sub(1);
            }
            Status::Pending => {
                self.stats.pending = self.stats.pending.saturating_sub(1);
            }
        }
    }

    fn replace(&mut self, task: Task) {
        if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *existing = task;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use chrono::Utc;

    fn task(id: &str, status: Status) -> Task {
        let now = Utc::now();
        Task {
            id: id.into(),
            title: format!("task {id}"),
            description: String::new(),
            priority: Priority::Medium,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    fn seeded(tasks: Vec<Task>) -> TaskCache {
        let completed = tasks.iter().filter(|t| t.status == Status::Completed).count() as u64;
        let total = tasks.len() as u64;
        let mut cache = TaskCache::new();
        cache.refresh(TaskPage {
            tasks,
            stats: Stats {
                total,
                completed,
                pending: total - completed,
            },
        });
        cache
    }

    fn assert_consistent(cache: &TaskCache) {
        let stats = cache.stats();
        assert_eq!(stats.completed + stats.pending, stats.total);
    }

    #[test]
    fn created_prepends_and_bumps_pending() {
        let mut cache = seeded(vec![task("a", Status::Pending)]);
        cache.apply_created(task("b", Status::Pending));

        assert_eq!(cache.tasks()[0].id, "b");
        assert_eq!(cache.stats().total, 2);
        assert_eq!(cache.stats().pending, 2);
        assert_eq!(cache.stats().completed, 0);
        assert_consistent(&cache);
    }

    #[test]
    fn updated_replaces_record_without_touching_counts() {
        let mut cache = seeded(vec![task("a", Status::Pending)]);
        let before = cache.stats();

        let mut renamed = task("a", Status::Pending);
        renamed.title = "renamed".into();
        cache.apply_updated(renamed);

        assert_eq!(cache.tasks()[0].title, "renamed");
        assert_eq!(cache.stats(), before);
    }

    #[test]
    fn status_change_moves_one_count_each_way() {
        let mut cache = seeded(vec![task("a", Status::Pending), task("b", Status::Pending)]);

        cache.apply_status(task("a", Status::Completed));
        assert_eq!(cache.stats().completed, 1);
        assert_eq!(cache.stats().pending, 1);
        assert_consistent(&cache);

        cache.apply_status(task("a", Status::Pending));
        assert_eq!(cache.stats().completed, 0);
        assert_eq!(cache.stats().pending, 2);
        assert_consistent(&cache);
    }

    #[test]
    fn same_status_ack_does_not_drift_counters() {
        let mut cache = seeded(vec![task("a", Status::Completed)]);
        let before = cache.stats();

        cache.apply_status(task("a", Status::Completed));
        cache.apply_status(task("a", Status::Completed));

        assert_eq!(cache.stats(), before);
        assert_consistent(&cache);
    }

    #[test]
    fn delete_decrements_by_last_known_status() {
        let mut cache = seeded(vec![task("a", Status::Completed), task("b", Status::Pending)]);

        cache.apply_deleted("a");
        assert_eq!(cache.stats().total, 1);
        assert_eq!(cache.stats().completed, 0);
        assert_eq!(cache.stats().pending, 1);

        cache.apply_deleted("b");
        assert_eq!(cache.stats(), Stats::default());
        assert!(cache.tasks().is_empty());
        assert_consistent(&cache);
    }

    #[test]
    fn delete_of_unknown_id_is_ignored() {
        let mut cache = seeded(vec![task("a", Status::Pending)]);
        let before = cache.stats();
        cache.apply_deleted("ghost");
        assert_eq!(cache.stats(), before);
        assert_eq!(cache.tasks().len(), 1);
    }

    #[test]
    fn filter_change_requires_refresh() {
        let mut cache = seeded(vec![task("a", Status::Pending)]);

        let same = cache.set_filter(TaskFilter::default());
        assert!(!same);

        let changed = cache.set_filter(TaskFilter {
            status: Some(Status::Completed),
            priority: None,
        });
        assert!(changed);

        // The stale view persists until the caller feeds in a fresh page.
        assert_eq!(cache.tasks().len(), 1);
        cache.refresh(TaskPage {
            tasks: vec![],
            stats: Stats {
                total: 1,
                completed: 0,
                pending: 1,
            },
        });
        assert!(cache.tasks().is_empty());
        assert_eq!(cache.stats().total, 1);
    }

    #[test]
    fn refresh_discards_accumulated_deltas() {
        let mut cache = seeded(vec![]);
        cache.apply_created(task("a", Status::Pending));
        cache.apply_created(task("b", Status::Pending));

        // Authoritative list only knows about one task.
        cache.refresh(TaskPage {
            tasks: vec![task("a", Status::Pending)],
            stats: Stats {
                total: 1,
                completed: 0,
                pending: 1,
            },
        });
        assert_eq!(cache.tasks().len(), 1);
        assert_eq!(cache.stats().total, 1);
    }
}
