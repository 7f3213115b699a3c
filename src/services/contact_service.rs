use std::sync::Arc;

use crate::{
    data::{
        ContactSource,
        entities::{BusinessDay, ContactEdit, ContactInfo, SocialPlatform},
    },
    error::AppError,
};

#[derive(Clone)]
pub struct ContactService {
    contact: Arc<dyn ContactSource>,
}

impl ContactService {
    pub fn new(contact: Arc<dyn ContactSource>) -> Self {
        Self { contact }
    }

    pub async fn get(&self) -> Result<ContactInfo, AppError> {
        Ok(self.contact.get().await?)
    }

    pub async fn save(&self, contact: ContactInfo) -> Result<ContactInfo, AppError> {
        let saved = self.contact.save(contact).await?;
        tracing::info!("contact details saved");
        Ok(saved)
    }

    pub async fn set_social(
        &self,
        platform: SocialPlatform,
        value: &str,
    ) -> Result<ContactInfo, AppError> {
        let edit = ContactEdit::Social(platform, value.trim().to_string());
        let saved = self.contact.edit(edit).await?;
        tracing::info!(platform = platform.as_str(), "social link saved");
        Ok(saved)
    }

    pub async fn set_hours(&self, day: BusinessDay, value: &str) -> Result<ContactInfo, AppError> {
        let edit = ContactEdit::Hours(day, value.trim().to_string());
        let saved = self.contact.edit(edit).await?;
        tracing::info!(day = day.as_str(), "business hours saved");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MemoryContact, StubDelay, seed};

    fn service() -> ContactService {
        ContactService::new(Arc::new(MemoryContact::new(seed::contact(), StubDelay::none())))
    }

    #[tokio::test]
    async fn field_setters_persist_one_value() {
        let service = service();

        service
            .set_social(SocialPlatform::Twitter, " x.com/foodadmin ")
            .await
            .expect("set social");
        let contact = service
            .set_hours(BusinessDay::Sunday, "Closed")
            .await
            .expect("set hours");

        assert_eq!(contact.social_media.twitter, "x.com/foodadmin");
        assert_eq!(contact.social_media.facebook, "facebook.com/foodadmin");
        assert_eq!(contact.business_hours.sunday, "Closed");
        assert_eq!(contact.business_hours.monday, "9:00 AM - 10:00 PM");
        assert_eq!(service.get().await.expect("get"), contact);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_field_edits_both_stick() {
        let source = MemoryContact::new(
            seed::contact(),
            StubDelay::new(std::time::Duration::from_millis(20)),
        );
        let service = ContactService::new(Arc::new(source));

        let (social, hours) = tokio::join!(
            service.set_social(SocialPlatform::Instagram, "instagram.com/eats"),
            service.set_hours(BusinessDay::Saturday, "Closed"),
        );
        social.expect("set social");
        hours.expect("set hours");

        let contact = service.get().await.expect("get");
        assert_eq!(contact.social_media.instagram, "instagram.com/eats");
        assert_eq!(contact.business_hours.saturday, "Closed");
    }
}
