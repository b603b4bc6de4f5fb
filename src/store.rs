//! Record store for members and teams.
//!
//! Handlers consume the store through the [`Store`] trait; the bot ships with
//! an in-memory implementation. A durable backend would slot in behind the
//! same trait without touching the command engine.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use thiserror::Error;

use crate::cmd::HandlerError;
use crate::model::{Member, Team};

/// Store failures, all with user-presentable messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("member {0} does not exist")]
    MemberNotFound(String),

    #[error("team \"{0}\" does not exist")]
    TeamNotFound(String),

    #[error("team \"{0}\" already exists")]
    TeamExists(String),

    #[error("member {member} is not on team \"{team}\"")]
    NotOnTeam { member: String, team: String },
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        Self::Failed(err.to_string())
    }
}

/// CRUD surface for member and team records.
pub trait Store: Send + Sync {
    /// Fetch a member, creating a fresh record if the id is unknown.
    fn ensure_member(&self, id: &str) -> Member;

    /// Fetch a member by platform id.
    fn member(&self, id: &str) -> Result<Member, StoreError>;

    /// Replace a member's record. The member must already exist.
    fn update_member(&self, member: &Member) -> Result<(), StoreError>;

    /// Set or clear a member's admin flag, creating the record if needed.
    fn set_admin(&self, id: &str, is_admin: bool) -> Member;

    /// Create a team with the given name.
    fn create_team(&self, name: &str) -> Result<Team, StoreError>;

    /// Delete a team and all its memberships.
    fn delete_team(&self, name: &str) -> Result<(), StoreError>;

    /// Fetch a team by name.
    fn team(&self, name: &str) -> Result<Team, StoreError>;

    /// All teams in name order.
    fn teams(&self) -> Vec<Team>;

    /// All members holding the admin flag, in id order.
    fn admins(&self) -> Vec<Member>;

    /// Add a member to a team. The member record is created if unknown.
    fn add_to_team(&self, team: &str, member_id: &str) -> Result<(), StoreError>;

    /// Remove a member from a team.
    fn remove_from_team(&self, team: &str, member_id: &str) -> Result<(), StoreError>;
}

#[derive(Default)]
struct Inner {
    members: HashMap<String, Member>,
    teams: BTreeMap<String, Team>,
}

/// In-memory [`Store`] backed by a read-write lock.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn ensure_member(&self, id: &str) -> Member {
        let mut inner = self.inner.write();
        inner
            .members
            .entry(id.to_string())
            .or_insert_with(|| Member::new(id))
            .clone()
    }

    fn member(&self, id: &str) -> Result<Member, StoreError> {
        self.inner
            .read()
            .members
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::MemberNotFound(crate::cmd::util::to_mention(id)))
    }

    fn update_member(&self, member: &Member) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        match inner.members.get_mut(&member.id) {
            Some(existing) => {
                *existing = member.clone();
                Ok(())
            }
            None => Err(StoreError::MemberNotFound(crate::cmd::util::to_mention(
                &member.id,
            ))),
        }
    }

    fn set_admin(&self, id: &str, is_admin: bool) -> Member {
        let mut inner = self.inner.write();
        let member = inner
            .members
            .entry(id.to_string())
            .or_insert_with(|| Member::new(id));
        member.is_admin = is_admin;
        member.clone()
    }

    fn create_team(&self, name: &str) -> Result<Team, StoreError> {
        let mut inner = self.inner.write();
        if inner.teams.contains_key(name) {
            return Err(StoreError::TeamExists(name.to_string()));
        }
        let team = Team::new(name);
        inner.teams.insert(name.to_string(), team.clone());
        Ok(team)
    }

    fn delete_team(&self, name: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        inner
            .teams
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::TeamNotFound(name.to_string()))
    }

    fn team(&self, name: &str) -> Result<Team, StoreError> {
        self.inner
            .read()
            .teams
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::TeamNotFound(name.to_string()))
    }

    fn teams(&self) -> Vec<Team> {
        self.inner.read().teams.values().cloned().collect()
    }

    fn admins(&self) -> Vec<Member> {
        let inner = self.inner.read();
        let mut admins: Vec<Member> = inner
            .members
            .values()
            .filter(|m| m.is_admin)
            .cloned()
            .collect();
        admins.sort_by(|a, b| a.id.cmp(&b.id));
        admins
    }

    fn add_to_team(&self, team: &str, member_id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        if !inner.members.contains_key(member_id) {
            inner
                .members
                .insert(member_id.to_string(), Member::new(member_id));
        }
        let team = inner
            .teams
            .get_mut(team)
            .ok_or_else(|| StoreError::TeamNotFound(team.to_string()))?;
        team.members.insert(member_id.to_string());
        Ok(())
    }

    fn remove_from_team(&self, team_name: &str, member_id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let team = inner
            .teams
            .get_mut(team_name)
            .ok_or_else(|| StoreError::TeamNotFound(team_name.to_string()))?;
        if !team.members.remove(member_id) {
            return Err(StoreError::NotOnTeam {
                member: crate::cmd::util::to_mention(member_id),
                team: team_name.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_member_is_an_upsert() {
        let store = MemoryStore::new();
        let first = store.ensure_member("U1");
        let again = store.ensure_member("U1");
        assert_eq!(first, again);
    }

    #[test]
    fn update_member_requires_existing_record() {
        let store = MemoryStore::new();
        let missing = Member::new("U9");
        assert!(matches!(
            store.update_member(&missing),
            Err(StoreError::MemberNotFound(_))
        ));

        let mut member = store.ensure_member("U1");
        member.name = "A Guy".to_string();
        store.update_member(&member).unwrap();
        assert_eq!(store.member("U1").unwrap().name, "A Guy");
    }

    #[test]
    fn team_lifecycle() {
        let store = MemoryStore::new();
        store.create_team("platform").unwrap();
        assert!(matches!(
            store.create_team("platform"),
            Err(StoreError::TeamExists(_))
        ));

        store.add_to_team("platform", "U1").unwrap();
        assert!(store.team("platform").unwrap().members.contains("U1"));

        store.remove_from_team("platform", "U1").unwrap();
        assert!(matches!(
            store.remove_from_team("platform", "U1"),
            Err(StoreError::NotOnTeam { .. })
        ));

        store.delete_team("platform").unwrap();
        assert!(matches!(
            store.team("platform"),
            Err(StoreError::TeamNotFound(_))
        ));
    }

    #[test]
    fn admins_lists_flagged_members_in_id_order() {
        let store = MemoryStore::new();
        store.ensure_member("U1");
        store.set_admin("U3", true);
        store.set_admin("U2", true);
        let ids: Vec<String> = store.admins().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["U2", "U3"]);

        store.set_admin("U3", false);
        let ids: Vec<String> = store.admins().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["U2"]);
    }

    #[test]
    fn teams_enumerate_in_name_order() {
        let store = MemoryStore::new();
        store.create_team("web").unwrap();
        store.create_team("android").unwrap();
        let names: Vec<String> = store.teams().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["android", "web"]);
    }
}
