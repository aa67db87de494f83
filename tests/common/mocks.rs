//! In-memory mock implementations of the host store traits.
//!
//! All mocks count their calls so tests can assert on store traffic (e.g.
//! that cancellation stops it). Failure injection is per area tag.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use newscan::error::StoreError;
use newscan::models::{
    Conference, FileId, MessageArea, MessageHeader, NewFileFilter, SortOrder, User, UserId,
};
use newscan::traits::{
    AreaDirectory, FileStore, MessageStore, PresentationSink, ResumeDecision, UserProperties,
};
use newscan::ScanResults;

/// Directory backed by fixed conference/area lists.
#[derive(Default)]
pub struct MockDirectory {
    pub conferences: Vec<Conference>,
    /// conf tag -> host-ordered area list
    pub areas: HashMap<String, Vec<MessageArea>>,
    pub file_tags: Vec<String>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_conference(
        mut self,
        tag: &str,
        name: &str,
        areas: &[(&str, &str)],
    ) -> Self {
        self.conferences.push(Conference::new(tag, name, ""));
        self.areas.insert(
            tag.to_string(),
            areas
                .iter()
                .map(|(t, n)| MessageArea::new(*t, *n, ""))
                .collect(),
        );
        self
    }

    pub fn with_file_tags(mut self, tags: &[&str]) -> Self {
        self.file_tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}

impl AreaDirectory for MockDirectory {
    fn conferences(&self, _user: &User) -> Result<Vec<Conference>, StoreError> {
        Ok(self.conferences.clone())
    }

    fn areas_for_conference(
        &self,
        conf_tag: &str,
        _user: &User,
    ) -> Result<Vec<MessageArea>, StoreError> {
        self.areas
            .get(conf_tag)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn file_area_tags(&self, _user: &User) -> Result<Vec<String>, StoreError> {
        Ok(self.file_tags.clone())
    }
}

/// Message store backed by per-area message lists.
#[derive(Default)]
pub struct MockMessageStore {
    messages: HashMap<String, Vec<MessageHeader>>,
    failing_areas: HashSet<String>,
    pub count_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
}

impl MockMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages(mut self, area_tag: &str, messages: Vec<MessageHeader>) -> Self {
        self.messages.insert(area_tag.to_string(), messages);
        self
    }

    /// Make every call for `area_tag` fail.
    pub fn with_failing_area(mut self, area_tag: &str) -> Self {
        self.failing_areas.insert(area_tag.to_string());
        self
    }

    pub fn total_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst) + self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageStore for MockMessageStore {
    async fn new_message_count(
        &self,
        _user_id: UserId,
        area_tag: &str,
    ) -> Result<usize, StoreError> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_areas.contains(area_tag) {
            return Err(StoreError::backend("injected failure"));
        }
        Ok(self.messages.get(area_tag).map(Vec::len).unwrap_or(0))
    }

    async fn new_messages(
        &self,
        _user_id: UserId,
        area_tag: &str,
    ) -> Result<Vec<MessageHeader>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_areas.contains(area_tag) {
            return Err(StoreError::backend("injected failure"));
        }
        Ok(self.messages.get(area_tag).cloned().unwrap_or_default())
    }
}

/// File store backed by a flat (id, area tag) list.
#[derive(Default)]
pub struct MockFileStore {
    files: Vec<(FileId, String)>,
    last_viewed: Mutex<Option<FileId>>,
    pub find_calls: AtomicUsize,
}

impl MockFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(mut self, files: &[(FileId, &str)]) -> Self {
        self.files = files
            .iter()
            .map(|(id, tag)| (*id, tag.to_string()))
            .collect();
        self
    }

    pub fn with_last_viewed(self, id: FileId) -> Self {
        *self.last_viewed.lock().unwrap() = Some(id);
        self
    }

    pub fn last_viewed(&self) -> Option<FileId> {
        *self.last_viewed.lock().unwrap()
    }
}

#[async_trait]
impl FileStore for MockFileStore {
    async fn find_new_files(&self, filter: &NewFileFilter) -> Result<Vec<FileId>, StoreError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        let boundary = filter.newer_than_file_id.unwrap_or(0);
        let mut ids: Vec<FileId> = self
            .files
            .iter()
            .filter(|(id, tag)| {
                (filter.newer_than_file_id.is_none() || *id > boundary)
                    && filter.area_tags.iter().any(|t| t == tag)
            })
            .map(|(id, _)| *id)
            .collect();
        match filter.order {
            SortOrder::Ascending => ids.sort_unstable(),
            SortOrder::Descending => ids.sort_unstable_by(|a, b| b.cmp(a)),
        }
        Ok(ids)
    }

    async fn last_viewed_file_id(&self, _user_id: UserId) -> Result<Option<FileId>, StoreError> {
        Ok(*self.last_viewed.lock().unwrap())
    }

    async fn set_last_viewed_file_id(
        &self,
        _user_id: UserId,
        file_id: FileId,
    ) -> Result<(), StoreError> {
        *self.last_viewed.lock().unwrap() = Some(file_id);
        Ok(())
    }
}

/// Property store backed by a map.
#[derive(Default)]
pub struct MockUserProperties {
    props: HashMap<String, String>,
    pub fail: bool,
}

impl MockUserProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.props.insert(name.to_string(), value.to_string());
        self
    }

    /// A property store whose every read fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl UserProperties for MockUserProperties {
    async fn property(&self, _user_id: UserId, name: &str) -> Result<Option<String>, StoreError> {
        if self.fail {
            return Err(StoreError::backend("injected failure"));
        }
        Ok(self.props.get(name).cloned())
    }
}

/// Sink that records everything it is shown and answers from a script.
pub struct RecordingSink {
    pub presented: Vec<ScanResults>,
    pub completed: bool,
    /// Decisions returned per presentation, in order; `Continue` once empty.
    pub decisions: Vec<ResumeDecision>,
    next_decision: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            presented: Vec::new(),
            completed: false,
            decisions: Vec::new(),
            next_decision: 0,
        }
    }

    pub fn cancelling_after(n: usize) -> Self {
        let mut decisions = vec![ResumeDecision::Continue; n.saturating_sub(1)];
        decisions.push(ResumeDecision::Cancel);
        Self {
            presented: Vec::new(),
            completed: false,
            decisions,
            next_decision: 0,
        }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PresentationSink for RecordingSink {
    async fn present_results(&mut self, results: ScanResults) -> ResumeDecision {
        self.presented.push(results);
        let decision = self
            .decisions
            .get(self.next_decision)
            .copied()
            .unwrap_or(ResumeDecision::Continue);
        self.next_decision += 1;
        decision
    }

    async fn present_complete(&mut self) {
        self.completed = true;
    }
}
