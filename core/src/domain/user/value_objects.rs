pub struct RegisterUserInput {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

pub struct LoginInput {
    pub email: String,
    pub password: String,
}
