use crate::domain::user::entities::User;
use crate::entity::users::Model as UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            display_name: model.display_name,
            email: model.email,
            password_hash: model.password_hash,
            is_guest: model.is_guest,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
