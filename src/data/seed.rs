//! Demo records the in-memory sources start from.

use super::entities::{
    Banner, BusinessHours, ContactInfo, Customer, FoodItem, FoodOption, FoodStatus, LineItem,
    RecentOrder, SalesPoint, SocialMedia, StatCard, TopSellingItem, Transaction,
    TransactionStatus,
};

const BURGER_IMAGE: &str =
    "https://images.pexels.com/photos/1639557/pexels-photo-1639557.jpeg?auto=compress&cs=tinysrgb&w=100";
const PIZZA_IMAGE: &str =
    "https://images.pexels.com/photos/825661/pexels-photo-825661.jpeg?auto=compress&cs=tinysrgb&w=100";
const SALAD_IMAGE: &str =
    "https://images.pexels.com/photos/1211887/pexels-photo-1211887.jpeg?auto=compress&cs=tinysrgb&w=100";
const FRIES_IMAGE: &str =
    "https://images.pexels.com/photos/1583884/pexels-photo-1583884.jpeg?auto=compress&cs=tinysrgb&w=100";

fn option(id: &str, name: &str, price: f64) -> FoodOption {
    FoodOption {
        id: id.to_string(),
        name: name.to_string(),
        price,
    }
}

#[allow(clippy::too_many_arguments)]
fn food(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    price: f64,
    image: &str,
    status: FoodStatus,
    variants: Vec<FoodOption>,
    toppings: Vec<FoodOption>,
) -> FoodItem {
    FoodItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price,
        image: image.to_string(),
        status,
        variants,
        toppings,
    }
}

pub fn foods() -> Vec<FoodItem> {
    use FoodStatus::{Available, Hidden, OutOfStock};

    vec![
        food(
            "FOOD-1",
            "Cheeseburger Deluxe",
            "Beef patty, cheddar, pickles and house sauce",
            "Main Course",
            12.99,
            BURGER_IMAGE,
            Available,
            vec![
                option("VAR-1", "Single", 12.99),
                option("VAR-2", "Double", 15.99),
            ],
            vec![
                option("TOP-1", "Bacon", 1.50),
                option("TOP-2", "Extra Cheese", 0.99),
            ],
        ),
        food(
            "FOOD-2",
            "Pepperoni Pizza",
            "Stone-baked with mozzarella and pepperoni",
            "Main Course",
            15.99,
            PIZZA_IMAGE,
            Available,
            vec![
                option("VAR-3", "Medium", 15.99),
                option("VAR-4", "Large", 19.99),
            ],
            vec![option("TOP-3", "Jalapenos", 0.75)],
        ),
        food(
            "FOOD-3",
            "Chicken Caesar Salad",
            "Romaine, grilled chicken, parmesan and croutons",
            "Salad",
            10.50,
            SALAD_IMAGE,
            Available,
            Vec::new(),
            vec![option("TOP-4", "Avocado", 1.25)],
        ),
        food(
            "FOOD-4",
            "French Fries",
            "Crispy fries with sea salt",
            "Side",
            4.99,
            FRIES_IMAGE,
            Available,
            vec![
                option("VAR-5", "Regular", 4.99),
                option("VAR-6", "Large", 6.49),
            ],
            Vec::new(),
        ),
        food(
            "FOOD-5",
            "Garlic Bread",
            "Toasted baguette with garlic butter",
            "Appetizer",
            5.49,
            "",
            Available,
            Vec::new(),
            Vec::new(),
        ),
        food(
            "FOOD-6",
            "Onion Rings",
            "Beer-battered onion rings",
            "Side",
            4.49,
            "",
            OutOfStock,
            Vec::new(),
            Vec::new(),
        ),
        food(
            "FOOD-7",
            "Miso Soup",
            "Tofu, wakame and spring onion",
            "Appetizer",
            3.99,
            "",
            Available,
            Vec::new(),
            Vec::new(),
        ),
        food(
            "FOOD-8",
            "Sushi Platter",
            "Chef's selection of nigiri and maki",
            "Main Course",
            24.99,
            "",
            Hidden,
            Vec::new(),
            Vec::new(),
        ),
        food(
            "FOOD-9",
            "Chocolate Lava Cake",
            "Warm chocolate cake with a molten centre",
            "Dessert",
            7.99,
            "",
            Available,
            Vec::new(),
            vec![option("TOP-5", "Vanilla Ice Cream", 1.99)],
        ),
        food(
            "FOOD-10",
            "Iced Tea",
            "Fresh brewed and lightly sweetened",
            "Beverage",
            2.99,
            "",
            Available,
            Vec::new(),
            Vec::new(),
        ),
        food(
            "FOOD-11",
            "Chicken Sandwich",
            "Buttermilk fried chicken on a brioche bun",
            "Main Course",
            9.99,
            "",
            Available,
            Vec::new(),
            Vec::new(),
        ),
        food(
            "FOOD-12",
            "Green Tea",
            "Japanese sencha",
            "Beverage",
            2.49,
            "",
            OutOfStock,
            Vec::new(),
            Vec::new(),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    join_date: &str,
    order_count: u32,
    total_spent: f64,
) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        join_date: join_date.to_string(),
        order_count,
        total_spent,
    }
}

pub fn customers() -> Vec<Customer> {
    vec![
        customer(
            "1",
            "John Doe",
            "john@example.com",
            "+1 234-567-8900",
            "123 Main St, City, Country",
            "2024-01-15",
            12,
            456.78,
        ),
        customer(
            "2",
            "Jane Smith",
            "jane@example.com",
            "+1 234-567-8901",
            "45 Oak Avenue, City, Country",
            "2024-02-03",
            8,
            312.40,
        ),
        customer(
            "3",
            "Bob Johnson",
            "bob@example.com",
            "+1 234-567-8902",
            "9 Harbor Road, City, Country",
            "2024-03-21",
            3,
            87.25,
        ),
        customer(
            "4",
            "Alice Williams",
            "alice@example.com",
            "+1 234-567-8903",
            "77 Elm Street, City, Country",
            "2024-05-09",
            21,
            904.10,
        ),
        customer(
            "5",
            "Charlie Brown",
            "charlie@example.com",
            "+1 234-567-8904",
            "5 Pine Lane, City, Country",
            "2025-01-30",
            1,
            18.90,
        ),
    ]
}

pub fn banners() -> Vec<Banner> {
    vec![
        Banner {
            id: "1".to_string(),
            title: "Summer Special Offer".to_string(),
            image: "https://images.pexels.com/photos/1639562/pexels-photo-1639562.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            link: "/summer-special".to_string(),
            active: true,
            order: 1,
        },
        Banner {
            id: "2".to_string(),
            title: "New Menu Items".to_string(),
            image: "https://images.pexels.com/photos/70497/pexels-photo-70497.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            link: "/new-menu".to_string(),
            active: true,
            order: 2,
        },
    ]
}

pub fn contact() -> ContactInfo {
    let weekday = "9:00 AM - 10:00 PM".to_string();
    ContactInfo {
        phone: "+1 (555) 123-4567".to_string(),
        email: "contact@foodadmin.com".to_string(),
        address: "123 Restaurant Street, Foodie City, FC 12345".to_string(),
        website: "www.foodadmin.com".to_string(),
        social_media: SocialMedia {
            facebook: "facebook.com/foodadmin".to_string(),
            instagram: "instagram.com/foodadmin".to_string(),
            twitter: "twitter.com/foodadmin".to_string(),
        },
        business_hours: BusinessHours {
            monday: weekday.clone(),
            tuesday: weekday.clone(),
            wednesday: weekday.clone(),
            thursday: weekday,
            friday: "9:00 AM - 11:00 PM".to_string(),
            saturday: "10:00 AM - 11:00 PM".to_string(),
            sunday: "10:00 AM - 9:00 PM".to_string(),
        },
    }
}

fn line(name: &str, quantity: u32, price: f64) -> LineItem {
    LineItem {
        name: name.to_string(),
        quantity,
        price,
    }
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "TRX-001".to_string(),
            order_id: "ORD-001".to_string(),
            customer: "John Doe".to_string(),
            date: "2025-04-10 14:30:00".to_string(),
            amount: 45.99,
            status: TransactionStatus::Completed,
            payment_method: "Credit Card".to_string(),
            items: vec![
                line("Cheeseburger", 2, 12.99),
                line("French Fries", 1, 4.99),
                line("Soft Drink", 2, 2.99),
            ],
        },
        Transaction {
            id: "TRX-002".to_string(),
            order_id: "ORD-002".to_string(),
            customer: "Jane Smith".to_string(),
            date: "2025-04-10 15:15:00".to_string(),
            amount: 32.50,
            status: TransactionStatus::Completed,
            payment_method: "PayPal".to_string(),
            items: vec![line("Pizza", 1, 24.99), line("Salad", 1, 7.51)],
        },
        Transaction {
            id: "TRX-003".to_string(),
            order_id: "ORD-003".to_string(),
            customer: "Bob Johnson".to_string(),
            date: "2025-04-10 18:05:00".to_string(),
            amount: 15.97,
            status: TransactionStatus::Pending,
            payment_method: "Cash".to_string(),
            items: vec![line("Chicken Sandwich", 1, 9.99), line("Iced Tea", 2, 2.99)],
        },
        Transaction {
            id: "TRX-004".to_string(),
            order_id: "ORD-004".to_string(),
            customer: "Alice Williams".to_string(),
            date: "2025-04-11 12:40:00".to_string(),
            amount: 24.99,
            status: TransactionStatus::Failed,
            payment_method: "Credit Card".to_string(),
            items: vec![line("Sushi Platter", 1, 24.99)],
        },
    ]
}

fn recent(
    id: &str,
    customer: &str,
    date: &str,
    amount: f64,
    status: &str,
    items: &[&str],
) -> RecentOrder {
    RecentOrder {
        id: id.to_string(),
        customer: customer.to_string(),
        date: date.to_string(),
        amount,
        status: status.to_string(),
        items: items.iter().map(|item| item.to_string()).collect(),
    }
}

pub fn recent_orders() -> Vec<RecentOrder> {
    vec![
        recent(
            "ORD-1234",
            "John Doe",
            "2025-04-10",
            32.50,
            "Completed",
            &["Cheeseburger", "French Fries", "Coke"],
        ),
        recent(
            "ORD-1235",
            "Jane Smith",
            "2025-04-10",
            45.20,
            "Processing",
            &["Pepperoni Pizza", "Garlic Bread", "Sprite"],
        ),
        recent(
            "ORD-1236",
            "Bob Johnson",
            "2025-04-09",
            28.75,
            "Completed",
            &["Caesar Salad", "Iced Tea"],
        ),
        recent(
            "ORD-1237",
            "Alice Williams",
            "2025-04-09",
            52.30,
            "Processing",
            &["Sushi Platter", "Miso Soup", "Green Tea"],
        ),
        recent(
            "ORD-1238",
            "Charlie Brown",
            "2025-04-08",
            18.90,
            "Cancelled",
            &["Chicken Sandwich", "Onion Rings"],
        ),
    ]
}

fn top(
    id: &str,
    name: &str,
    image: &str,
    price: f64,
    sold_count: u32,
    total_stock: u32,
) -> TopSellingItem {
    TopSellingItem {
        id: id.to_string(),
        name: name.to_string(),
        image: image.to_string(),
        price,
        sold_count,
        total_stock,
    }
}

pub fn top_selling() -> Vec<TopSellingItem> {
    vec![
        top("FOOD-1", "Cheeseburger Deluxe", BURGER_IMAGE, 12.99, 245, 300),
        top("FOOD-2", "Pepperoni Pizza", PIZZA_IMAGE, 15.99, 198, 250),
        top("FOOD-3", "Chicken Caesar Salad", SALAD_IMAGE, 10.50, 152, 200),
        top("FOOD-4", "French Fries", FRIES_IMAGE, 4.99, 320, 400),
    ]
}

pub fn sales() -> Vec<SalesPoint> {
    [
        ("2025-04-04", 1250.0),
        ("2025-04-05", 1420.0),
        ("2025-04-06", 1680.0),
        ("2025-04-07", 1475.0),
        ("2025-04-08", 1590.0),
        ("2025-04-09", 1780.0),
        ("2025-04-10", 1850.0),
    ]
    .into_iter()
    .map(|(date, amount)| SalesPoint {
        date: date.to_string(),
        amount,
    })
    .collect()
}

pub fn stats() -> Vec<StatCard> {
    [
        ("Total Orders", "1,234", 12.5),
        ("Total Customers", "856", 8.2),
        ("Total Revenue", "$23,456", -2.5),
        ("Avg. Order Value", "$19.00", 4.7),
    ]
    .into_iter()
    .map(|(title, value, change)| StatCard {
        title: title.to_string(),
        value: value.to_string(),
        change,
    })
    .collect()
}
