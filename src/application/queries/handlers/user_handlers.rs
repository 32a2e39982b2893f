//! User Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::DocumentStorePort;
use crate::application::queries::{GetUser, ListUsers};
use crate::application::records::user_from_document;
use crate::domain::user::{User, UserError, USERS_COLLECTION};

/// GetUser Handler
pub struct GetUserHandler {
    store: Arc<dyn DocumentStorePort>,
}

impl GetUserHandler {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetUser) -> Result<User, ApplicationError> {
        let document = self
            .store
            .get_by_id(USERS_COLLECTION, query.user_id.as_i64())
            .await?
            .ok_or(UserError::NotFound(query.user_id))?;

        user_from_document(document)
    }
}

/// ListUsers Handler
///
/// team 为空字符串时等同于不过滤。
pub struct ListUsersHandler {
    store: Arc<dyn DocumentStorePort>,
}

impl ListUsersHandler {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListUsers) -> Result<Vec<User>, ApplicationError> {
        let users = self
            .store
            .get(USERS_COLLECTION)
            .await?
            .into_iter()
            .map(user_from_document)
            .collect::<Result<Vec<_>, _>>()?;

        let users = match query.team.as_deref() {
            Some(team) if !team.is_empty() => {
                users.into_iter().filter(|u| u.belongs_to(team)).collect()
            }
            _ => users,
        };

        tracing::debug!(team = ?query.team, count = users.len(), "Users listed");

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;
    use crate::infrastructure::memory::InMemoryDocumentStore;

    fn list_handler() -> ListUsersHandler {
        ListUsersHandler::new(InMemoryDocumentStore::with_demo_users().arc())
    }

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().filter_map(User::name).collect()
    }

    #[tokio::test]
    async fn test_list_all_users_in_store_order() {
        let users = list_handler().handle(ListUsers::default()).await.unwrap();
        assert_eq!(names(&users), vec!["Aria", "Tim", "Varun", "Alex"]);
    }

    #[tokio::test]
    async fn test_list_filters_by_team() {
        let users = list_handler()
            .handle(ListUsers {
                team: Some("LWB".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(names(&users), vec!["Aria", "Tim"]);
    }

    #[tokio::test]
    async fn test_list_unknown_team_is_empty() {
        let users = list_handler()
            .handle(ListUsers {
                team: Some("lwb".to_string()),
            })
            .await
            .unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_list_empty_team_returns_all() {
        let users = list_handler()
            .handle(ListUsers {
                team: Some(String::new()),
            })
            .await
            .unwrap();
        assert_eq!(users.len(), 4);
    }

    #[tokio::test]
    async fn test_get_user_by_id() {
        let handler = GetUserHandler::new(InMemoryDocumentStore::with_demo_users().arc());

        let user = handler
            .handle(GetUser {
                user_id: UserId::new(3),
            })
            .await
            .unwrap();
        assert_eq!(user.name(), Some("Varun"));

        let err = handler
            .handle(GetUser {
                user_id: UserId::new(42),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
