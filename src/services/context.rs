use crate::{
    data::DataContext,
    services::{
        auth_service::AuthService, banner_service::BannerService,
        contact_service::ContactService, customer_service::CustomerService,
        dashboard_service::DashboardService, food_service::FoodService,
        transaction_service::TransactionService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    data: DataContext,
}

impl ServiceContext {
    pub fn new(data: &DataContext) -> Self {
        Self { data: data.clone() }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.data)
    }

    pub fn food(&self) -> FoodService {
        FoodService::new(self.data.foods())
    }

    pub fn customers(&self) -> CustomerService {
        CustomerService::new(self.data.customers())
    }

    pub fn banners(&self) -> BannerService {
        BannerService::new(self.data.banners())
    }

    pub fn contact(&self) -> ContactService {
        ContactService::new(self.data.contact())
    }

    pub fn transactions(&self) -> TransactionService {
        TransactionService::new(self.data.transactions())
    }

    pub fn dashboard(&self) -> DashboardService {
        DashboardService::new(self.data.dashboard())
    }

    pub fn auth<'a>(&self, state: &'a AppState) -> AuthService<'a> {
        AuthService::new(
            state.session.as_ref(),
            &state.jwt,
            state.config.auth.token_ttl_secs as usize,
        )
    }
}
