use crate::catalogue::{Catalogue, Item, ItemType};
use std::fmt;
use std::str::FromStr;

/// Default number of items on the home page
pub const DEFAULT_HOME_PAGE_SIZE: usize = 12;

/// A named listing page and the candidate items it shows before filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingPage {
    /// The first few catalogue entries, events and businesses mixed
    Home,
    Events,
    Businesses,
}

impl ListingPage {
    pub const ALL_PAGES: [ListingPage; 3] =
        [ListingPage::Home, ListingPage::Events, ListingPage::Businesses];

    pub fn name(&self) -> &'static str {
        match self {
            ListingPage::Home => "home",
            ListingPage::Events => "events",
            ListingPage::Businesses => "businesses",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ListingPage::Home => "Events and Businesses",
            ListingPage::Events => "Events",
            ListingPage::Businesses => "Businesses",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ListingPage::Home => {
                "XR events and businesses shaping immersive work across the Highlands."
            }
            ListingPage::Events => {
                "Find upcoming XR meetups, workshops, and showcases across the Highlands."
            }
            ListingPage::Businesses => {
                "Explore studios, venues, and organisations working with XR across the Highlands."
            }
        }
    }

    /// Heading shown when a selection leaves nothing to list
    pub fn empty_title(&self) -> &'static str {
        match self {
            ListingPage::Home => "No listings match these filters",
            ListingPage::Events => "No events match these filters",
            ListingPage::Businesses => "No businesses match these filters",
        }
    }

    pub fn empty_description(&self) -> &'static str {
        match self {
            ListingPage::Home => "Try another tag or location combination.",
            ListingPage::Events | ListingPage::Businesses => {
                "Try resetting filters or selecting a different tag and location."
            }
        }
    }

    /// Restrict a page to one item type, if it does so
    pub fn item_type(&self) -> Option<ItemType> {
        match self {
            ListingPage::Home => None,
            ListingPage::Events => Some(ItemType::event),
            ListingPage::Businesses => Some(ItemType::business),
        }
    }

    /// The page's pre-filter candidate set, in catalogue order
    ///
    /// # Arguments
    /// * `catalogue` - The loaded catalogue
    /// * `home_page_size` - How many leading items the home page takes
    pub fn candidates<'a>(&self, catalogue: &'a Catalogue, home_page_size: usize) -> Vec<&'a Item> {
        let items = catalogue.get_items();
        match self.item_type() {
            None => items.iter().take(home_page_size).collect(),
            Some(item_type) => items
                .iter()
                .filter(|item| item.item_type == item_type)
                .collect(),
        }
    }
}

impl fmt::Display for ListingPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ListingPage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(ListingPage::Home),
            "events" => Ok(ListingPage::Events),
            "businesses" => Ok(ListingPage::Businesses),
            _ => Err(format!(
                "Invalid page '{}'. Valid pages: home, events, businesses",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_catalogue(count: usize) -> Catalogue {
        let items = (0..count)
            .map(|n| Item {
                id: format!("item-{}", n),
                title: format!("Item {}", n),
                item_type: if n % 3 == 0 {
                    ItemType::business
                } else {
                    ItemType::event
                },
                location: "Inverness".to_string(),
                date: None,
                tags: Vec::new(),
                description: String::new(),
                long_description: None,
                image: None,
                url: None,
            })
            .collect();
        Catalogue::from_items(items)
    }

    #[test]
    fn test_home_takes_leading_items() {
        let catalogue = numbered_catalogue(20);
        let home = ListingPage::Home.candidates(&catalogue, DEFAULT_HOME_PAGE_SIZE);
        assert_eq!(home.len(), 12);
        assert_eq!(home[0].id, "item-0");
        assert_eq!(home[11].id, "item-11");

        let small = numbered_catalogue(5);
        assert_eq!(ListingPage::Home.candidates(&small, 12).len(), 5);
        assert!(ListingPage::Home.candidates(&small, 0).is_empty());
    }

    #[test]
    fn test_type_pages_partition_catalogue() {
        let catalogue = numbered_catalogue(20);
        let events = ListingPage::Events.candidates(&catalogue, 12);
        let businesses = ListingPage::Businesses.candidates(&catalogue, 12);

        assert!(events.iter().all(|i| i.is_event()));
        assert!(businesses.iter().all(|i| i.is_business()));
        assert_eq!(events.len() + businesses.len(), catalogue.len());
        // order follows the catalogue
        assert_eq!(businesses[0].id, "item-0");
        assert_eq!(businesses[1].id, "item-3");
    }

    #[test]
    fn test_page_from_str_round_trips_names() {
        for page in ListingPage::ALL_PAGES {
            assert_eq!(page.name().parse::<ListingPage>().unwrap(), page);
        }
        assert!("Events".parse::<ListingPage>().is_err());
        assert!("items".parse::<ListingPage>().is_err());
    }
}
