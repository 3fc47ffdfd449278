use std::sync::Arc;

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::{
    db::CsvStore,
    services::{AuthService, DataService, VizService},
};

#[derive(Clone)]
pub struct AppState {
    pub jwt: JwtKeys,
    pub auth: AuthService,
    pub data: DataService,
    pub viz: VizService,
}

#[derive(Clone)]
pub struct JwtKeys {
    pub enc: EncodingKey,
    pub dec: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            enc: EncodingKey::from_secret(secret),
            dec: DecodingKey::from_secret(secret),
        }
    }
}

impl AppState {
    pub fn new(secret: &[u8], store: CsvStore) -> Arc<Self> {
        let data = DataService::new(store.clone());
        Arc::new(Self {
            jwt: JwtKeys::from_secret(secret),
            auth: AuthService::new(store),
            viz: VizService::new(data.clone()),
            data,
        })
    }
}
