//! 테스트용 인메모리 리포지토리
//!
//! PostgreSQL 구현과 같은 계약(중복 검사, 조건부 갱신, 정렬/검색 규칙)을
//! `Mutex`로 보호된 벡터 위에서 흉내 냅니다.

use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::companies::{Company, CompanyDraft};
use crate::domain::entities::products::{
    Product, ProductDraft, ProductListOptions, ProductSortField,
};
use crate::domain::entities::users::{NewUser, User};
use crate::domain::models::pagination::{PageRequest, SortOrder};
use crate::repositories::{
    CompanyRepository, ProductRepository, UserRepository, DUPLICATE_EMAIL, DUPLICATE_PRODUCT,
};

fn page_of<T: Clone>(items: &[T], page: PageRequest) -> Vec<T> {
    items
        .iter()
        .skip(page.offset() as usize)
        .take(page.limit as usize)
        .cloned()
        .collect()
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// 테스트 검증용 스냅샷
    pub fn snapshot(&self, id: i64) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }

    /// 재설정 토큰 만료 시각을 직접 조정합니다.
    pub fn set_reset_expiry(&self, id: i64, expires_at: DateTime<Utc>) {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == id) {
            user.reset_token_expires_at = Some(expires_at);
        }
    }

    /// 사용자를 직접 제거합니다. (토큰은 유효하지만 사용자가 사라진 상황)
    pub fn remove(&self, id: i64) {
        self.users.lock().unwrap().retain(|u| u.id != id);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::ValidationError(DUPLICATE_EMAIL.to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: users.iter().map(|u| u.id).max().unwrap_or(0) + 1,
            email: new_user.email,
            password_hash: new_user.password_hash,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            is_verified: false,
            verification_token: Some(new_user.verification_token),
            reset_token_hash: None,
            reset_token_expires_at: None,
            refresh_token_hash: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.snapshot(id))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_reset_token(&self, token_hash: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.reset_token_hash.as_deref() == Some(token_hash))
            .cloned())
    }

    async fn verify_email(&self, token: &str) -> AppResult<bool> {
        let mut users = self.users.lock().unwrap();
        match users
            .iter_mut()
            .find(|u| !u.is_verified && u.verification_token.as_deref() == Some(token))
        {
            Some(user) => {
                user.is_verified = true;
                user.verification_token = None;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn record_login(&self, id: i64, refresh_token_hash: &str) -> AppResult<()> {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == id) {
            user.refresh_token_hash = Some(refresh_token_hash.to_string());
            user.last_login_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn rotate_refresh_token(
        &self,
        id: i64,
        current_hash: &str,
        new_hash: &str,
    ) -> AppResult<bool> {
        let mut users = self.users.lock().unwrap();
        match users
            .iter_mut()
            .find(|u| u.id == id && u.holds_refresh_token(current_hash))
        {
            Some(user) => {
                user.refresh_token_hash = Some(new_hash.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn clear_refresh_token(&self, id: i64) -> AppResult<()> {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == id) {
            user.refresh_token_hash = None;
        }
        Ok(())
    }

    async fn set_reset_token(
        &self,
        id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == id) {
            user.reset_token_hash = Some(token_hash.to_string());
            user.reset_token_expires_at = Some(expires_at);
        }
        Ok(())
    }

    async fn reset_password(
        &self,
        token_hash: &str,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let mut users = self.users.lock().unwrap();
        match users
            .iter_mut()
            .find(|u| u.reset_token_valid_at(token_hash, now))
        {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                user.reset_token_hash = None;
                user.reset_token_expires_at = None;
                user.refresh_token_hash = None;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    fn has_duplicate(products: &[Product], draft: &ProductDraft, exclude_id: Option<i64>) -> bool {
        products.iter().any(|p| {
            Some(p.id) != exclude_id && (p.code == draft.code || p.sku == draft.sku)
        })
    }

    fn compare(a: &Product, b: &Product, sort: ProductSortField) -> Ordering {
        let primary = match sort {
            ProductSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            ProductSortField::Name => a.name.cmp(&b.name),
            ProductSortField::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            ProductSortField::Quantity => a.quantity.cmp(&b.quantity),
        };
        primary.then(a.id.cmp(&b.id))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self, options: ProductListOptions) -> AppResult<(Vec<Product>, i64)> {
        let mut products = self.products.lock().unwrap().clone();
        products.sort_by(|a, b| {
            let ordering = Self::compare(a, b, options.sort);
            match options.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        Ok((page_of(&products, options.page), products.len() as i64))
    }

    async fn search(&self, term: &str, page: PageRequest) -> AppResult<(Vec<Product>, i64)> {
        let needle = term.to_lowercase();
        let mut matches: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                [&p.name, &p.description, &p.code, &p.sku]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        matches.sort_by_key(|p| p.id);
        Ok((page_of(&matches, page), matches.len() as i64))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        Ok(self.products.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, draft: ProductDraft) -> AppResult<Product> {
        let mut products = self.products.lock().unwrap();
        if Self::has_duplicate(&products, &draft, None) {
            return Err(AppError::ValidationError(DUPLICATE_PRODUCT.to_string()));
        }

        let now = Utc::now();
        let product = Product {
            id: products.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            name: draft.name,
            description: draft.description,
            sub_description: draft.sub_description,
            code: draft.code,
            sku: draft.sku,
            price: draft.price,
            price_sale: draft.price_sale,
            quantity: draft.quantity,
            taxes: draft.taxes,
            images: draft.images.unwrap_or_default(),
            colors: draft.colors,
            sizes: draft.sizes,
            tags: draft.tags,
            gender: draft.gender,
            category: draft.category,
            new_label: draft.new_label,
            sale_label: draft.sale_label,
            is_published: draft.is_published,
            created_at: now,
            updated_at: now,
        };
        products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, draft: ProductDraft) -> AppResult<Option<Product>> {
        let mut products = self.products.lock().unwrap();
        if !products.iter().any(|p| p.id == id) {
            return Ok(None);
        }
        if Self::has_duplicate(&products, &draft, Some(id)) {
            return Err(AppError::ValidationError(DUPLICATE_PRODUCT.to_string()));
        }

        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        product.name = draft.name;
        product.description = draft.description;
        product.sub_description = draft.sub_description;
        product.code = draft.code;
        product.sku = draft.sku;
        product.price = draft.price;
        product.price_sale = draft.price_sale;
        product.quantity = draft.quantity;
        product.taxes = draft.taxes;
        if let Some(images) = draft.images {
            product.images = images;
        }
        product.colors = draft.colors;
        product.sizes = draft.sizes;
        product.tags = draft.tags;
        product.gender = draft.gender;
        product.category = draft.category;
        product.new_label = draft.new_label;
        product.sale_label = draft.sale_label;
        product.is_published = draft.is_published;
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryCompanyRepository {
    companies: Mutex<Vec<Company>>,
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn list(&self) -> AppResult<Vec<Company>> {
        Ok(self.companies.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Company>> {
        Ok(self.companies.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, draft: CompanyDraft) -> AppResult<Company> {
        let mut companies = self.companies.lock().unwrap();
        let now = Utc::now();
        let company = Company {
            id: companies.iter().map(|c| c.id).max().unwrap_or(0) + 1,
            name: draft.name,
            industry: draft.industry,
            created_at: now,
            updated_at: now,
        };
        companies.push(company.clone());
        Ok(company)
    }

    async fn update(&self, id: i64, draft: CompanyDraft) -> AppResult<Option<Company>> {
        let mut companies = self.companies.lock().unwrap();
        Ok(companies.iter_mut().find(|c| c.id == id).map(|company| {
            company.name = draft.name;
            company.industry = draft.industry;
            company.updated_at = Utc::now();
            company.clone()
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut companies = self.companies.lock().unwrap();
        let before = companies.len();
        companies.retain(|c| c.id != id);
        Ok(companies.len() < before)
    }
}
