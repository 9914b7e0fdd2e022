//! User service implementation.

use crate::dto::{
    CreateUserRequest, DeleteUserResponse, UpdateUserRequest, UserRecordResponse, UserResponse,
};
use crate::user_service::UserService;
use async_trait::async_trait;
use roster_core::{is_valid_email, is_valid_phone, RosterError, RosterResult, UserId};
use roster_repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, error, info};

/// User service over a repository.
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserRecordResponse> {
        debug!("Creating user: {}", request.email);

        if !is_valid_email(&request.email) {
            return Err(RosterError::validation("Invalid email format"));
        }

        if !is_valid_phone(&request.phone) {
            return Err(RosterError::validation("Invalid phone number format"));
        }

        // Email uniqueness is left to the store's constraint; a violation
        // comes back as Conflict carrying the driver's message
        let saved = self
            .user_repository
            .insert(&request.into())
            .await
            .inspect_err(|e| error!("Create user failed: {}", e))?;

        info!("User created: {}", saved.id);
        Ok(UserRecordResponse::from(saved))
    }

    async fn list_users(&self) -> RosterResult<Vec<UserResponse>> {
        debug!("Listing users");

        let users = self.user_repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found(id))?;

        Ok(UserResponse::from(user))
    }

    async fn update_user(
        &self,
        id: UserId,
        request: UpdateUserRequest,
    ) -> RosterResult<UserRecordResponse> {
        debug!("Updating user: {}", id);

        let mut user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found(id))?;

        // Every field is replaced unconditionally; update applies no
        // format validation
        user.overwrite(request.into());

        let updated = self
            .user_repository
            .update(&user)
            .await
            .inspect_err(|e| error!("Update user failed: {}", e))?
            .ok_or_else(|| RosterError::not_found(id))?;

        info!("User updated: {}", id);
        Ok(UserRecordResponse::from(updated))
    }

    async fn delete_user(&self, id: UserId) -> RosterResult<DeleteUserResponse> {
        debug!("Deleting user: {}", id);

        let deleted = self.user_repository.delete(id).await?;

        if !deleted {
            return Err(RosterError::not_found(id));
        }

        info!("User deleted: {}", id);
        Ok(DeleteUserResponse::for_id(id))
    }
}

impl<R: UserRepository> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{NewUser, User};
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// Mock user repository with store-like id assignment and email
    /// uniqueness.
    struct MockUserRepository {
        users: Mutex<BTreeMap<i32, User>>,
        next_id: Mutex<i32>,
    }

    impl MockUserRepository {
        fn new() -> Self {
            Self {
                users: Mutex::new(BTreeMap::new()),
                next_id: Mutex::new(1),
            }
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn insert(&self, user: &NewUser) -> RosterResult<User> {
            let mut users = self.users.lock().unwrap();
            if users.values().any(|u| u.email == user.email) {
                return Err(RosterError::Conflict(format!(
                    "duplicate key value violates unique constraint \"users_email_key\": {}",
                    user.email
                )));
            }

            let mut next_id = self.next_id.lock().unwrap();
            let id = UserId(*next_id);
            *next_id += 1;

            let stored = User {
                id,
                firstname: user.firstname.clone(),
                lastname: user.lastname.clone(),
                email: user.email.clone(),
                password: user.password.clone(),
                address: user.address.clone(),
                phone: user.phone.clone(),
            };
            users.insert(id.into_inner(), stored.clone());
            Ok(stored)
        }

        async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>> {
            Ok(self.users.lock().unwrap().get(&id.into_inner()).cloned())
        }

        async fn find_all(&self) -> RosterResult<Vec<User>> {
            Ok(self.users.lock().unwrap().values().cloned().collect())
        }

        async fn update(&self, user: &User) -> RosterResult<Option<User>> {
            let mut users = self.users.lock().unwrap();
            if users.contains_key(&user.id.into_inner()) {
                users.insert(user.id.into_inner(), user.clone());
                Ok(Some(user.clone()))
            } else {
                Ok(None)
            }
        }

        async fn delete(&self, id: UserId) -> RosterResult<bool> {
            Ok(self.users.lock().unwrap().remove(&id.into_inner()).is_some())
        }
    }

    fn create_service() -> UserServiceImpl<MockUserRepository> {
        UserServiceImpl::new(Arc::new(MockUserRepository::new()))
    }

    fn create_request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: email.to_string(),
            password: "plaintext".to_string(),
            address: "12 Analytical Way".to_string(),
            phone: "1234567890".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_assigns_id_and_echoes_password() {
        let service = create_service();

        let created = service.create_user(create_request("a@b.com")).await.unwrap();
        assert_eq!(created.id, UserId(1));
        assert_eq!(created.password, "plaintext");

        let second = service.create_user(create_request("c@d.com")).await.unwrap();
        assert_eq!(second.id, UserId(2));
    }

    #[tokio::test]
    async fn test_create_user_invalid_email() {
        let service = create_service();

        let err = service
            .create_user(create_request("not-an-email"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid email format");
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_create_user_invalid_phone() {
        let service = create_service();

        let mut request = create_request("a@b.com");
        request.phone = "12345".to_string();
        let err = service.create_user(request).await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid phone number format");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email_is_conflict() {
        let service = create_service();

        service.create_user(create_request("dup@b.com")).await.unwrap();
        let err = service
            .create_user(create_request("dup@b.com"))
            .await
            .unwrap_err();

        match &err {
            RosterError::Conflict(msg) => assert!(msg.contains("unique")),
            other => panic!("expected Conflict, got {other:?}"),
        }
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_get_user_round_trip() {
        let service = create_service();
        let created = service.create_user(create_request("a@b.com")).await.unwrap();

        let fetched = service.get_user(created.id).await.unwrap();
        assert_eq!(fetched.firstname, "Ada");
        assert_eq!(fetched.email, "a@b.com");
        assert_eq!(fetched.phone, "1234567890");
    }

    #[tokio::test]
    async fn test_get_user_not_found_names_the_id() {
        let service = create_service();

        let err = service.get_user(UserId(41)).await.unwrap_err();
        assert_eq!(err.to_string(), "No user found with the id 41");
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_list_users_in_insertion_order() {
        let service = create_service();
        service.create_user(create_request("1@b.com")).await.unwrap();
        service.create_user(create_request("2@b.com")).await.unwrap();

        let users = service.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users[0].id < users[1].id);
    }

    #[tokio::test]
    async fn test_update_overwrites_without_validation() {
        let service = create_service();
        let created = service.create_user(create_request("a@b.com")).await.unwrap();

        // Invalid email and phone pass straight through on update
        let updated = service
            .update_user(
                created.id,
                UpdateUserRequest {
                    firstname: "Grace".to_string(),
                    lastname: "Hopper".to_string(),
                    email: "definitely-not-an-email".to_string(),
                    password: "newpass".to_string(),
                    address: "1 Navy Yard".to_string(),
                    phone: "xyz".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.email, "definitely-not-an-email");
        assert_eq!(updated.phone, "xyz");
        assert_eq!(updated.password, "newpass");
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let service = create_service();

        let err = service
            .update_user(
                UserId(7),
                UpdateUserRequest {
                    firstname: "G".to_string(),
                    lastname: "H".to_string(),
                    email: "g@h.com".to_string(),
                    password: "p".to_string(),
                    address: "a".to_string(),
                    phone: "1234567890".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let service = create_service();
        let created = service.create_user(create_request("a@b.com")).await.unwrap();

        let response = service.delete_user(created.id).await.unwrap();
        assert_eq!(response.message, format!("User {} deleted successfully", created.id));

        let err = service.delete_user(created.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);

        let err = service.get_user(created.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
