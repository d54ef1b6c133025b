//! [`EntitySource`] implementations over the admin API

use super::{EntitySource, FailureMessages};
use async_trait::async_trait;
use transparency_client::{AdminApiClient, ApiResult};
use transparency_core::types::{
    BulkRequest, Company, CompanyCreate, CompanyFilters, CompanyUpdate, Page, Product,
    ProductCreate, ProductFilters, ProductUpdate, SupportTicket, TicketCreate, TicketFilters,
    TicketUpdate, User, UserCreate, UserFilters, UserUpdate,
};

const BULK_FAILED: &str = "Failed to perform bulk operation";

/// `/admin/users`
#[derive(Debug, Clone)]
pub struct UserSource(pub AdminApiClient);

#[async_trait]
impl EntitySource for UserSource {
    type Item = User;
    type Filters = UserFilters;
    type Create = UserCreate;
    type Update = UserUpdate;

    const NAME: &'static str = "users";

    const MESSAGES: FailureMessages = FailureMessages {
        load: "Failed to load users",
        create: "Failed to create user",
        update: "Failed to update user",
        delete: "Failed to delete user",
        bulk: BULK_FAILED,
    };

    async fn list(&self, filters: &UserFilters) -> ApiResult<Page<User>> {
        self.0.list_users(filters).await
    }

    async fn create(&self, body: &UserCreate) -> ApiResult<User> {
        self.0.create_user(body).await
    }

    async fn update(&self, id: &str, body: &UserUpdate) -> ApiResult<()> {
        self.0.update_user(id, body).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.0.delete_user(id).await
    }

    async fn bulk(&self, request: &BulkRequest) -> ApiResult<()> {
        self.0.bulk_user_operation(request).await
    }
}

/// `/admin/companies`
#[derive(Debug, Clone)]
pub struct CompanySource(pub AdminApiClient);

#[async_trait]
impl EntitySource for CompanySource {
    type Item = Company;
    type Filters = CompanyFilters;
    type Create = CompanyCreate;
    type Update = CompanyUpdate;

    const NAME: &'static str = "companies";

    const MESSAGES: FailureMessages = FailureMessages {
        load: "Failed to load companies",
        create: "Failed to create company",
        update: "Failed to update company",
        delete: "Failed to delete company",
        bulk: BULK_FAILED,
    };

    async fn list(&self, filters: &CompanyFilters) -> ApiResult<Page<Company>> {
        self.0.list_companies(filters).await
    }

    async fn create(&self, body: &CompanyCreate) -> ApiResult<Company> {
        self.0.create_company(body).await
    }

    async fn update(&self, id: &str, body: &CompanyUpdate) -> ApiResult<()> {
        self.0.update_company(id, body).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.0.delete_company(id).await
    }

    async fn bulk(&self, request: &BulkRequest) -> ApiResult<()> {
        self.0.bulk_company_operation(request).await
    }
}

/// `/admin/products`
#[derive(Debug, Clone)]
pub struct ProductSource(pub AdminApiClient);

#[async_trait]
impl EntitySource for ProductSource {
    type Item = Product;
    type Filters = ProductFilters;
    type Create = ProductCreate;
    type Update = ProductUpdate;

    const NAME: &'static str = "products";

    const MESSAGES: FailureMessages = FailureMessages {
        load: "Failed to load products",
        create: "Failed to create product",
        update: "Failed to update product",
        delete: "Failed to delete product",
        bulk: BULK_FAILED,
    };

    async fn list(&self, filters: &ProductFilters) -> ApiResult<Page<Product>> {
        self.0.list_products(filters).await
    }

    async fn create(&self, body: &ProductCreate) -> ApiResult<Product> {
        self.0.create_product(body).await
    }

    async fn update(&self, id: &str, body: &ProductUpdate) -> ApiResult<()> {
        self.0.update_product(id, body).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.0.delete_product(id).await
    }

    async fn bulk(&self, request: &BulkRequest) -> ApiResult<()> {
        self.0.bulk_product_operation(request).await
    }
}

/// `/admin/tickets`
#[derive(Debug, Clone)]
pub struct TicketSource(pub AdminApiClient);

#[async_trait]
impl EntitySource for TicketSource {
    type Item = SupportTicket;
    type Filters = TicketFilters;
    type Create = TicketCreate;
    type Update = TicketUpdate;

    const NAME: &'static str = "tickets";

    const MESSAGES: FailureMessages = FailureMessages {
        load: "Failed to load tickets",
        create: "Failed to create ticket",
        update: "Failed to update ticket",
        delete: "Failed to delete ticket",
        bulk: BULK_FAILED,
    };

    async fn list(&self, filters: &TicketFilters) -> ApiResult<Page<SupportTicket>> {
        self.0.list_tickets(filters).await
    }

    async fn create(&self, body: &TicketCreate) -> ApiResult<SupportTicket> {
        self.0.create_ticket(body).await
    }

    async fn update(&self, id: &str, body: &TicketUpdate) -> ApiResult<()> {
        self.0.update_ticket(id, body).await.map(|_| ())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.0.delete_ticket(id).await
    }

    async fn bulk(&self, request: &BulkRequest) -> ApiResult<()> {
        self.0.bulk_ticket_operation(request).await
    }
}
