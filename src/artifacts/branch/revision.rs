use crate::areas::database::Database;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::GitletError;

/// A commit named on the command line by its full or abbreviated ID
///
/// Abbreviations are matched against every stored commit. A prefix that matches nothing is
/// reported as a missing commit; one that matches several is rejected as ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision(String);

impl Revision {
    pub fn new(revision: &str) -> Self {
        Revision(revision.trim().to_ascii_lowercase())
    }

    pub fn resolve(&self, database: &Database) -> anyhow::Result<ObjectId> {
        if !Self::looks_like_oid(&self.0) {
            return Err(GitletError::CommitNotFound.into());
        }

        if self.0.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(self.0.clone())?;
            return match database.contains(ObjectType::Commit, &oid) {
                true => Ok(oid),
                false => Err(GitletError::CommitNotFound.into()),
            };
        }

        let mut matches = database.find_commits_by_prefix(&self.0)?;

        match matches.len() {
            0 => Err(GitletError::CommitNotFound.into()),
            1 => Ok(matches.remove(0)),
            _ => {
                tracing::debug!(prefix = %self.0, candidates = matches.len(), "ambiguous commit id");
                Err(GitletError::AmbiguousCommitId {
                    prefix: self.0.clone(),
                    candidates: matches
                        .iter()
                        .map(|oid| oid.to_short_oid())
                        .collect::<Vec<_>>()
                        .join(", "),
                }
                .into())
            }
        }
    }

    fn looks_like_oid(revision: &str) -> bool {
        !revision.is_empty()
            && revision.len() <= OBJECT_ID_LENGTH
            && revision.chars().all(|c| c.is_ascii_hexdigit())
    }
}
