use std::sync::RwLock;

use async_trait::async_trait;

use super::{
    BannerSource, ContactSource, CustomerSource, DashboardSource, DataError, DataResult,
    FoodSource, StubDelay, TransactionSource,
    entities::{
        Banner, ContactEdit, ContactInfo, Customer, FoodItem, MoveDirection, NewBanner, NewFood, RecentOrder,
        SalesPoint, StatCard, TopSellingItem, Transaction,
        banner::{apply_move, new_banner_id, normalize_order},
        food::new_food_id,
    },
    seed,
};

/// Lock wrapper that only exposes closures, so no guard outlives a call.
#[derive(Debug)]
struct Table<T> {
    entity: &'static str,
    rows: RwLock<T>,
}

impl<T> Table<T> {
    fn new(entity: &'static str, rows: T) -> Self {
        Self {
            entity,
            rows: RwLock::new(rows),
        }
    }

    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> DataResult<R> {
        let rows = self
            .rows
            .read()
            .map_err(|_| DataError::unavailable(self.entity, "lock poisoned"))?;
        Ok(f(&rows))
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> DataResult<R> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| DataError::unavailable(self.entity, "lock poisoned"))?;
        Ok(f(&mut rows))
    }
}

pub struct MemoryFoods {
    table: Table<Vec<FoodItem>>,
    delay: StubDelay,
}

impl MemoryFoods {
    pub fn new(items: Vec<FoodItem>, delay: StubDelay) -> Self {
        Self {
            table: Table::new("food", items),
            delay,
        }
    }
}

#[async_trait]
impl FoodSource for MemoryFoods {
    async fn list(&self) -> DataResult<Vec<FoodItem>> {
        self.delay.wait().await;
        self.table.read(|items| items.clone())
    }

    async fn get(&self, id: &str) -> DataResult<Option<FoodItem>> {
        self.delay.wait().await;
        self.table
            .read(|items| items.iter().find(|item| item.id == id).cloned())
    }

    async fn create(&self, food: NewFood) -> DataResult<FoodItem> {
        self.delay.wait().await;
        let item = food.into_item(new_food_id());
        self.table.write(|items| items.push(item.clone()))?;
        Ok(item)
    }

    async fn update(&self, id: &str, food: NewFood) -> DataResult<Option<FoodItem>> {
        self.delay.wait().await;
        self.table.write(|items| {
            let slot = items.iter_mut().find(|item| item.id == id)?;
            *slot = food.into_item(slot.id.clone());
            Some(slot.clone())
        })
    }

    async fn delete(&self, id: &str) -> DataResult<bool> {
        self.delay.wait().await;
        self.table.write(|items| {
            let before = items.len();
            items.retain(|item| item.id != id);
            items.len() != before
        })
    }
}

pub struct MemoryCustomers {
    table: Table<Vec<Customer>>,
    delay: StubDelay,
}

impl MemoryCustomers {
    pub fn new(customers: Vec<Customer>, delay: StubDelay) -> Self {
        Self {
            table: Table::new("customer", customers),
            delay,
        }
    }
}

#[async_trait]
impl CustomerSource for MemoryCustomers {
    async fn list(&self) -> DataResult<Vec<Customer>> {
        self.delay.wait().await;
        self.table.read(|customers| customers.clone())
    }

    async fn get(&self, id: &str) -> DataResult<Option<Customer>> {
        self.delay.wait().await;
        self.table
            .read(|customers| customers.iter().find(|customer| customer.id == id).cloned())
    }
}

pub struct MemoryBanners {
    table: Table<Vec<Banner>>,
    delay: StubDelay,
}

impl MemoryBanners {
    pub fn new(mut banners: Vec<Banner>, delay: StubDelay) -> Self {
        normalize_order(&mut banners);
        Self {
            table: Table::new("banner", banners),
            delay,
        }
    }
}

#[async_trait]
impl BannerSource for MemoryBanners {
    async fn list(&self) -> DataResult<Vec<Banner>> {
        self.delay.wait().await;
        self.table.read(|banners| banners.clone())
    }

    async fn create(&self, banner: NewBanner) -> DataResult<Banner> {
        self.delay.wait().await;
        self.table.write(|banners| {
            let created = Banner {
                id: new_banner_id(),
                title: banner.title,
                image: banner.image,
                link: banner.link,
                active: banner.active,
                order: banners.len() as u32 + 1,
            };
            banners.push(created.clone());
            created
        })
    }

    async fn update(&self, id: &str, banner: NewBanner) -> DataResult<Option<Banner>> {
        self.delay.wait().await;
        self.table.write(|banners| {
            let slot = banners.iter_mut().find(|existing| existing.id == id)?;
            slot.title = banner.title;
            slot.image = banner.image;
            slot.link = banner.link;
            slot.active = banner.active;
            Some(slot.clone())
        })
    }

    async fn delete(&self, id: &str) -> DataResult<bool> {
        self.delay.wait().await;
        self.table.write(|banners| {
            let before = banners.len();
            banners.retain(|banner| banner.id != id);
            normalize_order(banners);
            banners.len() != before
        })
    }

    async fn move_banner(
        &self,
        id: &str,
        direction: MoveDirection,
    ) -> DataResult<Option<Vec<Banner>>> {
        self.delay.wait().await;
        self.table.write(|banners| {
            apply_move(banners, id, direction).then(|| banners.clone())
        })
    }
}

pub struct MemoryContact {
    table: Table<ContactInfo>,
    delay: StubDelay,
}

impl MemoryContact {
    pub fn new(contact: ContactInfo, delay: StubDelay) -> Self {
        Self {
            table: Table::new("contact", contact),
            delay,
        }
    }
}

#[async_trait]
impl ContactSource for MemoryContact {
    async fn get(&self) -> DataResult<ContactInfo> {
        self.delay.wait().await;
        self.table.read(|contact| contact.clone())
    }

    async fn save(&self, contact: ContactInfo) -> DataResult<ContactInfo> {
        self.delay.wait().await;
        self.table.write(|stored| {
            *stored = contact;
            stored.clone()
        })
    }

    async fn edit(&self, edit: ContactEdit) -> DataResult<ContactInfo> {
        self.delay.wait().await;
        self.table.write(|stored| {
            edit.apply(stored);
            stored.clone()
        })
    }
}

pub struct MemoryTransactions {
    table: Table<Vec<Transaction>>,
    delay: StubDelay,
}

impl MemoryTransactions {
    pub fn new(transactions: Vec<Transaction>, delay: StubDelay) -> Self {
        Self {
            table: Table::new("transaction", transactions),
            delay,
        }
    }
}

#[async_trait]
impl TransactionSource for MemoryTransactions {
    async fn list(&self) -> DataResult<Vec<Transaction>> {
        self.delay.wait().await;
        self.table.read(|transactions| transactions.clone())
    }

    async fn get(&self, id: &str) -> DataResult<Option<Transaction>> {
        self.delay.wait().await;
        self.table.read(|transactions| {
            transactions
                .iter()
                .find(|transaction| transaction.id == id)
                .cloned()
        })
    }
}

/// Read-only dashboard figures.
pub struct MemoryDashboard {
    recent_orders: Vec<RecentOrder>,
    top_selling: Vec<TopSellingItem>,
    sales: Vec<SalesPoint>,
    stats: Vec<StatCard>,
    delay: StubDelay,
}

impl MemoryDashboard {
    pub fn seeded(delay: StubDelay) -> Self {
        Self {
            recent_orders: seed::recent_orders(),
            top_selling: seed::top_selling(),
            sales: seed::sales(),
            stats: seed::stats(),
            delay,
        }
    }
}

#[async_trait]
impl DashboardSource for MemoryDashboard {
    async fn recent_orders(&self) -> DataResult<Vec<RecentOrder>> {
        self.delay.wait().await;
        Ok(self.recent_orders.clone())
    }

    async fn top_selling(&self) -> DataResult<Vec<TopSellingItem>> {
        self.delay.wait().await;
        Ok(self.top_selling.clone())
    }

    async fn sales(&self) -> DataResult<Vec<SalesPoint>> {
        self.delay.wait().await;
        Ok(self.sales.clone())
    }

    async fn stats(&self) -> DataResult<Vec<StatCard>> {
        self.delay.wait().await;
        Ok(self.stats.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::data::entities::BusinessDay;

    fn draft(name: &str) -> NewFood {
        NewFood {
            name: name.to_string(),
            category: "Dessert".to_string(),
            price: 3.5,
            ..NewFood::default()
        }
    }

    #[tokio::test]
    async fn food_create_appends_with_fresh_id() {
        let foods = MemoryFoods::new(seed::foods(), StubDelay::none());
        let before = foods.list().await.expect("list");

        let created = foods.create(draft("Churros")).await.expect("create");
        let after = foods.list().await.expect("list");

        assert_eq!(after.len(), before.len() + 1);
        assert!(before.iter().all(|item| item.id != created.id));
        assert_eq!(after.last(), Some(&created));
    }

    #[tokio::test]
    async fn food_update_keeps_id_and_reports_missing() {
        let foods = MemoryFoods::new(seed::foods(), StubDelay::none());

        let updated = foods
            .update("FOOD-9", draft("Brownie"))
            .await
            .expect("update")
            .expect("FOOD-9 exists");
        let missing = foods.update("FOOD-404", draft("Ghost")).await.expect("update");

        assert_eq!(updated.id, "FOOD-9");
        assert_eq!(updated.name, "Brownie");
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn food_delete_reports_whether_anything_went() {
        let foods = MemoryFoods::new(seed::foods(), StubDelay::none());

        assert!(foods.delete("FOOD-1").await.expect("delete"));
        assert!(!foods.delete("FOOD-1").await.expect("delete again"));
        assert_eq!(foods.get("FOOD-1").await.expect("get"), None);
    }

    #[tokio::test]
    async fn banner_create_appends_and_delete_renumbers() {
        let banners = MemoryBanners::new(seed::banners(), StubDelay::none());

        let created = banners
            .create(NewBanner {
                title: "Late Night Deals".to_string(),
                active: true,
                ..NewBanner::default()
            })
            .await
            .expect("create");
        assert_eq!(created.order, 3);

        assert!(banners.delete("1").await.expect("delete"));
        let list = banners.list().await.expect("list");
        assert_eq!(
            list.iter()
                .map(|banner| (banner.id.as_str(), banner.order))
                .collect::<Vec<_>>(),
            [("2", 1), (created.id.as_str(), 2)]
        );
    }

    #[tokio::test]
    async fn banner_move_of_unknown_id_is_none() {
        let banners = MemoryBanners::new(seed::banners(), StubDelay::none());

        let moved = banners
            .move_banner("missing", MoveDirection::Up)
            .await
            .expect("move");

        assert_eq!(moved, None);
    }

    #[tokio::test]
    async fn contact_save_replaces_the_record() {
        let contact = MemoryContact::new(seed::contact(), StubDelay::none());
        let mut edited = contact.get().await.expect("get");
        edited.phone = "+1 (555) 000-0000".to_string();

        contact.save(edited.clone()).await.expect("save");

        assert_eq!(contact.get().await.expect("get"), edited);
    }

    #[tokio::test]
    async fn contact_edit_touches_one_field() {
        let contact = MemoryContact::new(seed::contact(), StubDelay::none());
        let before = contact.get().await.expect("get");

        let after = contact
            .edit(ContactEdit::Hours(BusinessDay::Sunday, "Closed".to_string()))
            .await
            .expect("edit");

        assert_eq!(after.business_hours.sunday, "Closed");
        assert_eq!(after.social_media, before.social_media);
        assert_eq!(after.business_hours.monday, before.business_hours.monday);
    }

    #[tokio::test]
    async fn calls_wait_for_the_stub_delay() {
        let customers =
            MemoryCustomers::new(seed::customers(), StubDelay::new(Duration::from_millis(30)));
        let started = tokio::time::Instant::now();

        customers.list().await.expect("list");

        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
