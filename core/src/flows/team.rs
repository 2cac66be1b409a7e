//! Admin editor for the board, team and partner listings.
//!
//! The three listings are arrays on the settings document and can only be
//! written whole. Entries get a session-local [`Uuid`] so edits and deletes
//! address an entry, not a position. Every write first re-reads the
//! document; if the target array no longer matches what the editor loaded,
//! the write is refused and the editor reloads.

use std::collections::HashMap;

use log::{debug, info, warn};
use uuid::Uuid;

use crate::api::Backend;
use crate::error::{ApiResult, EditorError, EditorResult, ValidationError};
use crate::models::{SettingsPatch, SiteSettings, TeamList, TeamMember};

/// A loaded listing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    pub member: TeamMember,
}

/// The shared add/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    /// `None` when adding.
    pub editing: Option<Uuid>,
    pub member: TeamMember,
}

impl EntryForm {
    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit"
        } else {
            "Tambah"
        }
    }
}

/// A whole-array replacement ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingWrite {
    pub list: TeamList,
    /// Array contents the editor believes the server holds.
    pub expected: Vec<TeamMember>,
    pub members: Vec<TeamMember>,
    /// Editor ids of `members`, same order.
    pub ids: Vec<Uuid>,
}

impl PendingWrite {
    /// `{fieldName: newArray}` body for `PUT /api/settings`.
    pub fn patch(&self) -> ApiResult<SettingsPatch> {
        let mut patch = SettingsPatch::new();
        patch.insert(
            self.list.field_name().to_string(),
            serde_json::to_value(&self.members)?,
        );
        Ok(patch)
    }
}

/// Result of [`commit`].
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// Written; carries the reloaded document.
    Saved(SiteSettings),
    /// Not written; carries the current document.
    Conflict(SiteSettings),
}

/// Check the server copy, write, reload.
pub async fn commit<B: Backend>(backend: &B, write: &PendingWrite) -> EditorResult<CommitOutcome> {
    let current = backend.settings().await?;
    if current.team_list(write.list) != write.expected.as_slice() {
        warn!("team editor: {} changed on the server", write.list.field_name());
        return Ok(CommitOutcome::Conflict(current));
    }

    backend.update_settings(&write.patch()?).await?;
    info!(
        "✅ Saved {} ({} entries)",
        write.list.field_name(),
        write.members.len()
    );
    Ok(CommitOutcome::Saved(backend.settings().await?))
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamEditor {
    lists: HashMap<TeamList, Vec<Entry>>,
    active: TeamList,
    form: Option<EntryForm>,
}

impl TeamEditor {
    pub fn new(settings: &SiteSettings) -> Self {
        let mut editor = Self {
            lists: HashMap::new(),
            active: TeamList::BoardOfDirectors,
            form: None,
        };
        editor.reload(settings);
        editor
    }

    pub async fn load<B: Backend>(backend: &B) -> EditorResult<Self> {
        Ok(Self::new(&backend.settings().await?))
    }

    /// Replace every list with `settings`. Entries equal to a previously
    /// loaded one keep its id.
    pub fn reload(&mut self, settings: &SiteSettings) {
        for list in TeamList::ALL {
            let mut previous = self.lists.remove(&list).unwrap_or_default();
            let entries = settings
                .team_list(list)
                .iter()
                .map(|member| {
                    let id = match previous.iter().position(|e| &e.member == member) {
                        Some(pos) => previous.remove(pos).id,
                        None => Uuid::new_v4(),
                    };
                    Entry { id, member: member.clone() }
                })
                .collect();
            self.lists.insert(list, entries);
        }
        debug!("team editor: reloaded");
    }

    pub fn active(&self) -> TeamList {
        self.active
    }

    pub fn select_tab(&mut self, list: TeamList) {
        self.active = list;
        self.form = None;
    }

    pub fn entries(&self) -> &[Entry] {
        self.entries_of(self.active)
    }

    pub fn entries_of(&self, list: TeamList) -> &[Entry] {
        self.lists.get(&list).map(Vec::as_slice).unwrap_or_default()
    }

    fn members_of(&self, list: TeamList) -> Vec<TeamMember> {
        self.entries_of(list).iter().map(|e| e.member.clone()).collect()
    }

    fn ids_of(&self, list: TeamList) -> Vec<Uuid> {
        self.entries_of(list).iter().map(|e| e.id).collect()
    }

    pub fn form(&self) -> Option<&EntryForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut EntryForm> {
        self.form.as_mut()
    }

    pub fn start_add(&mut self) {
        self.form = Some(EntryForm {
            editing: None,
            member: TeamMember::default(),
        });
    }

    pub fn start_edit(&mut self, id: Uuid) -> EditorResult<()> {
        let entry = self
            .entries()
            .iter()
            .find(|e| e.id == id)
            .ok_or(EditorError::UnknownEntry(id))?;
        self.form = Some(EntryForm {
            editing: Some(id),
            member: entry.member.clone(),
        });
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.form = None;
    }

    /// Validate the form and compute the replacement array.
    pub fn plan_save(&self) -> EditorResult<PendingWrite> {
        let form = self.form.as_ref().ok_or(EditorError::NoOpenForm)?;
        if form.member.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        if form.member.position.trim().is_empty() {
            return Err(ValidationError::MissingField("position").into());
        }

        let expected = self.members_of(self.active);
        let mut members = expected.clone();
        let mut ids = self.ids_of(self.active);
        match form.editing {
            Some(id) => {
                let pos = ids
                    .iter()
                    .position(|&e| e == id)
                    .ok_or(EditorError::UnknownEntry(id))?;
                members[pos] = form.member.clone();
            }
            None => {
                members.push(form.member.clone());
                ids.push(Uuid::new_v4());
            }
        }

        Ok(PendingWrite {
            list: self.active,
            expected,
            members,
            ids,
        })
    }

    /// Compute the array without entry `id`.
    pub fn plan_delete(&self, id: Uuid) -> EditorResult<PendingWrite> {
        let pos = self
            .entries()
            .iter()
            .position(|e| e.id == id)
            .ok_or(EditorError::UnknownEntry(id))?;
        let expected = self.members_of(self.active);
        let mut members = expected.clone();
        let mut ids = self.ids_of(self.active);
        members.remove(pos);
        ids.remove(pos);

        Ok(PendingWrite {
            list: self.active,
            expected,
            members,
            ids,
        })
    }

    /// Fold a commit outcome back in. A conflict reloads and is reported
    /// as an error; the form stays open.
    pub fn apply_commit(&mut self, write: &PendingWrite, outcome: CommitOutcome) -> EditorResult<()> {
        match outcome {
            CommitOutcome::Saved(settings) => {
                let written = write
                    .ids
                    .iter()
                    .zip(&write.members)
                    .map(|(&id, member)| Entry { id, member: member.clone() })
                    .collect();
                self.lists.insert(write.list, written);
                self.reload(&settings);
                self.form = None;
                Ok(())
            }
            CommitOutcome::Conflict(settings) => {
                let field = write.list.field_name();
                self.reload(&settings);
                Err(EditorError::Conflict { field })
            }
        }
    }

    pub async fn save<B: Backend>(&mut self, backend: &B) -> EditorResult<()> {
        let write = self.plan_save()?;
        let outcome = commit(backend, &write).await?;
        self.apply_commit(&write, outcome)
    }

    pub async fn delete<B: Backend>(&mut self, backend: &B, id: Uuid) -> EditorResult<()> {
        let write = self.plan_delete(id)?;
        let outcome = commit(backend, &write).await?;
        self.apply_commit(&write, outcome)
    }

    /// Put an uploaded photo URL into the open form.
    pub fn set_photo(&mut self, url: String) -> EditorResult<()> {
        let form = self.form.as_mut().ok_or(EditorError::NoOpenForm)?;
        form.member.photo = url;
        Ok(())
    }

    pub async fn upload_photo<B: Backend>(&mut self, backend: &B, file: &B::File) -> EditorResult<()> {
        if self.form.is_none() {
            return Err(EditorError::NoOpenForm);
        }
        let url = backend.upload_team_photo(file).await?;
        self.set_photo(url)
    }
}
