use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Twitter,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 3] = [
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Twitter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Twitter => "twitter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Twitter => "Twitter",
        }
    }
}

impl TryFrom<&str> for SocialPlatform {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == value)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl BusinessDay {
    pub const ALL: [BusinessDay; 7] = [
        BusinessDay::Monday,
        BusinessDay::Tuesday,
        BusinessDay::Wednesday,
        BusinessDay::Thursday,
        BusinessDay::Friday,
        BusinessDay::Saturday,
        BusinessDay::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessDay::Monday => "monday",
            BusinessDay::Tuesday => "tuesday",
            BusinessDay::Wednesday => "wednesday",
            BusinessDay::Thursday => "thursday",
            BusinessDay::Friday => "friday",
            BusinessDay::Saturday => "saturday",
            BusinessDay::Sunday => "sunday",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BusinessDay::Monday => "Monday",
            BusinessDay::Tuesday => "Tuesday",
            BusinessDay::Wednesday => "Wednesday",
            BusinessDay::Thursday => "Thursday",
            BusinessDay::Friday => "Friday",
            BusinessDay::Saturday => "Saturday",
            BusinessDay::Sunday => "Sunday",
        }
    }
}

impl TryFrom<&str> for BusinessDay {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == value)
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialMedia {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
}

impl SocialMedia {
    pub fn get(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::Facebook => &self.facebook,
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::Twitter => &self.twitter,
        }
    }

    pub fn set(&mut self, platform: SocialPlatform, value: impl Into<String>) {
        let slot = match platform {
            SocialPlatform::Facebook => &mut self.facebook,
            SocialPlatform::Instagram => &mut self.instagram,
            SocialPlatform::Twitter => &mut self.twitter,
        };
        *slot = value.into();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BusinessHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl BusinessHours {
    pub fn get(&self, day: BusinessDay) -> &str {
        match day {
            BusinessDay::Monday => &self.monday,
            BusinessDay::Tuesday => &self.tuesday,
            BusinessDay::Wednesday => &self.wednesday,
            BusinessDay::Thursday => &self.thursday,
            BusinessDay::Friday => &self.friday,
            BusinessDay::Saturday => &self.saturday,
            BusinessDay::Sunday => &self.sunday,
        }
    }

    pub fn set(&mut self, day: BusinessDay, value: impl Into<String>) {
        let slot = match day {
            BusinessDay::Monday => &mut self.monday,
            BusinessDay::Tuesday => &mut self.tuesday,
            BusinessDay::Wednesday => &mut self.wednesday,
            BusinessDay::Thursday => &mut self.thursday,
            BusinessDay::Friday => &mut self.friday,
            BusinessDay::Saturday => &mut self.saturday,
            BusinessDay::Sunday => &mut self.sunday,
        };
        *slot = value.into();
    }

    /// Days in week order, paired with their opening hours.
    pub fn entries(&self) -> Vec<(BusinessDay, &str)> {
        BusinessDay::ALL
            .into_iter()
            .map(|day| (day, self.get(day)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub website: String,
    pub social_media: SocialMedia,
    pub business_hours: BusinessHours,
}

/// One field of the contact record, changed in place by a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEdit {
    Social(SocialPlatform, String),
    Hours(BusinessDay, String),
}

impl ContactEdit {
    pub fn apply(self, contact: &mut ContactInfo) {
        match self {
            ContactEdit::Social(platform, value) => contact.social_media.set(platform, value),
            ContactEdit::Hours(day, value) => contact.business_hours.set(day, value),
        }
    }
}
