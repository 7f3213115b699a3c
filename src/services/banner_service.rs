use std::sync::Arc;

use crate::{
    data::{
        BannerSource,
        entities::{Banner, MoveDirection, NewBanner},
    },
    error::AppError,
};

fn validate(banner: NewBanner) -> Result<NewBanner, AppError> {
    let title = banner.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::validation("Banner title is required"));
    }
    Ok(NewBanner {
        title,
        image: banner.image.trim().to_string(),
        link: banner.link.trim().to_string(),
        active: banner.active,
    })
}

#[derive(Clone)]
pub struct BannerService {
    banners: Arc<dyn BannerSource>,
}

impl BannerService {
    pub fn new(banners: Arc<dyn BannerSource>) -> Self {
        Self { banners }
    }

    pub async fn list(&self) -> Result<Vec<Banner>, AppError> {
        Ok(self.banners.list().await?)
    }

    pub async fn require(&self, id: &str) -> Result<Banner, AppError> {
        self.list()
            .await?
            .into_iter()
            .find(|banner| banner.id == id)
            .ok_or_else(|| AppError::not_found("Banner not found"))
    }

    pub async fn create(&self, banner: NewBanner) -> Result<Banner, AppError> {
        let created = self.banners.create(validate(banner)?).await?;
        tracing::info!(id = %created.id, "banner created");
        Ok(created)
    }

    pub async fn update(&self, id: &str, banner: NewBanner) -> Result<Banner, AppError> {
        self.banners
            .update(id, validate(banner)?)
            .await?
            .ok_or_else(|| AppError::not_found("Banner not found"))
    }

    pub async fn move_banner(
        &self,
        id: &str,
        direction: MoveDirection,
    ) -> Result<Vec<Banner>, AppError> {
        let banners = self
            .banners
            .move_banner(id, direction)
            .await?
            .ok_or_else(|| AppError::not_found("Banner not found"))?;
        tracing::debug!(id = %id, direction = direction.as_str(), "banner moved");
        Ok(banners)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.banners.delete(id).await? {
            return Err(AppError::not_found("Banner not found"));
        }
        tracing::info!(id = %id, "banner deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MemoryBanners, StubDelay, seed};

    fn service() -> BannerService {
        BannerService::new(Arc::new(MemoryBanners::new(seed::banners(), StubDelay::none())))
    }

    fn titles(banners: &[Banner]) -> Vec<&str> {
        banners.iter().map(|banner| banner.title.as_str()).collect()
    }

    #[tokio::test]
    async fn moving_down_then_edges_are_noops() {
        let service = service();

        let moved = service
            .move_banner("1", MoveDirection::Down)
            .await
            .expect("move");
        assert_eq!(titles(&moved), ["New Menu Items", "Summer Special Offer"]);

        let top_up = service.move_banner("2", MoveDirection::Up).await.expect("move");
        let bottom_down = service
            .move_banner("1", MoveDirection::Down)
            .await
            .expect("move");
        assert_eq!(titles(&top_up), titles(&moved));
        assert_eq!(titles(&bottom_down), titles(&moved));
    }

    #[tokio::test]
    async fn create_requires_a_title() {
        let service = service();

        let err = service
            .create(NewBanner {
                title: "   ".to_string(),
                ..NewBanner::default()
            })
            .await
            .expect_err("blank title");

        assert_eq!(err, AppError::validation("Banner title is required"));
        assert_eq!(service.list().await.expect("list").len(), 2);
    }

    #[tokio::test]
    async fn update_edits_fields_in_place() {
        let service = service();

        let updated = service
            .update(
                "2",
                NewBanner {
                    title: "Autumn Menu".to_string(),
                    image: String::new(),
                    link: "/autumn".to_string(),
                    active: false,
                },
            )
            .await
            .expect("update");

        assert_eq!(updated.order, 2);
        assert!(!updated.active);
        assert_eq!(service.require("2").await.expect("require").title, "Autumn Menu");
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let service = service();

        assert!(service.move_banner("9", MoveDirection::Up).await.is_err());
        assert!(service.delete("9").await.is_err());
        assert!(service.update("9", NewBanner {
            title: "x".to_string(),
            ..NewBanner::default()
        })
        .await
        .is_err());
    }
}
