//! Table storage and the constraint rules applied to it.

use std::collections::HashMap;

use uuid::Uuid;

use commentary_core::domain::{Comment, Entity, Post, User};
use commentary_core::error::RepoError;

/// One map per table, keyed by primary key.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    users: HashMap<Uuid, User>,
    posts: HashMap<Uuid, Post>,
    comments: HashMap<Uuid, Comment>,
}

/// A staged write, replayable against any copy of the tables.
pub type Change = Box<dyn Fn(&mut Tables) -> Result<(), RepoError> + Send + Sync>;

/// Writes of one unit of work. The working copy is taken on the first write.
#[derive(Default)]
pub struct Staged {
    working: Option<Tables>,
    changes: Vec<Change>,
}

impl Staged {
    pub fn working(&self) -> Option<&Tables> {
        self.working.as_ref()
    }

    /// Apply `change` to the working copy and remember it for commit.
    pub fn stage(
        &mut self,
        live: &Tables,
        change: impl Fn(&mut Tables) -> Result<(), RepoError> + Send + Sync + 'static,
    ) -> Result<(), RepoError> {
        let working = self.working.get_or_insert_with(|| live.clone());
        change(working)?;
        self.changes.push(Box::new(change));
        Ok(())
    }

    pub fn take_changes(&mut self) -> Vec<Change> {
        std::mem::take(&mut self.changes)
    }
}

/// Storage rules for one entity type.
pub trait Row: Entity {
    fn table(tables: &Tables) -> &HashMap<Uuid, Self>;

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self>;

    /// Foreign-key check run on insert and update.
    fn check_references(&self, _tables: &Tables) -> Result<(), RepoError> {
        Ok(())
    }

    /// Remove dependent rows after `id` was deleted.
    fn cascade(_id: Uuid, _tables: &mut Tables) {}
}

impl Row for User {
    fn table(tables: &Tables) -> &HashMap<Uuid, Self> {
        &tables.users
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self> {
        &mut tables.users
    }

    fn cascade(id: Uuid, tables: &mut Tables) {
        let owned: Vec<Uuid> = tables
            .posts
            .values()
            .filter(|post| post.author_id == id)
            .map(|post| post.id)
            .collect();
        for post_id in owned {
            tables.posts.remove(&post_id);
            Post::cascade(post_id, tables);
        }
        tables.comments.retain(|_, comment| comment.author_id != id);
    }
}

impl Row for Post {
    fn table(tables: &Tables) -> &HashMap<Uuid, Self> {
        &tables.posts
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self> {
        &mut tables.posts
    }

    fn check_references(&self, tables: &Tables) -> Result<(), RepoError> {
        require_row::<User>(tables, self.author_id, "posts.author_id")
    }

    fn cascade(id: Uuid, tables: &mut Tables) {
        tables.comments.retain(|_, comment| comment.post_id != id);
    }
}

impl Row for Comment {
    fn table(tables: &Tables) -> &HashMap<Uuid, Self> {
        &tables.comments
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self> {
        &mut tables.comments
    }

    fn check_references(&self, tables: &Tables) -> Result<(), RepoError> {
        require_row::<Post>(tables, self.post_id, "comments.post_id")?;
        require_row::<User>(tables, self.author_id, "comments.author_id")
    }
}

fn require_row<T: Row>(tables: &Tables, id: Uuid, column: &str) -> Result<(), RepoError> {
    if T::table(tables).contains_key(&id) {
        Ok(())
    } else {
        Err(RepoError::Constraint(format!(
            "{column} references missing {} {id}",
            T::NAME
        )))
    }
}

pub fn insert_row<T: Row>(tables: &mut Tables, row: T) -> Result<(), RepoError> {
    let id = row.id();
    if T::table(tables).contains_key(&id) {
        return Err(RepoError::Constraint(format!(
            "{} {id} already exists",
            T::NAME
        )));
    }
    row.check_references(tables)?;
    T::table_mut(tables).insert(id, row);
    Ok(())
}

pub fn update_row<T: Row>(tables: &mut Tables, row: T) -> Result<(), RepoError> {
    let id = row.id();
    if !T::table(tables).contains_key(&id) {
        return Err(RepoError::NotFound);
    }
    row.check_references(tables)?;
    T::table_mut(tables).insert(id, row);
    Ok(())
}

pub fn delete_row<T: Row>(tables: &mut Tables, id: Uuid) -> Result<(), RepoError> {
    if T::table_mut(tables).remove(&id).is_none() {
        return Err(RepoError::NotFound);
    }
    T::cascade(id, tables);
    Ok(())
}
