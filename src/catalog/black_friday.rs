use crate::domain::{Category, PriceRange, QuantityRange, Scenario};

pub(super) fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            Category::Beauty,
            3,
            ["Labial-Matte", "Base-Liquida", "Perfume-Floral", "Crema-Hidratante"],
            PriceRange::new(50.0, 300.0),
            QuantityRange::new(1, 5),
        ),
        Scenario::new(
            Category::Electronics,
            1,
            ["TV-Samsung", "iPhone-15", "Laptop-HP"],
            PriceRange::new(2000.0, 8000.0),
            QuantityRange::fixed(1),
        ),
        Scenario::new(
            Category::Clothing,
            1,
            ["Camisa-Polo", "Jeans-Levis", "Vestido-Gala"],
            PriceRange::new(100.0, 500.0),
            QuantityRange::new(1, 3),
        ),
        Scenario::new(
            Category::Home,
            1,
            ["Licuadora", "Microondas", "Sofa"],
            PriceRange::new(300.0, 1500.0),
            QuantityRange::fixed(1),
        ),
    ]
}
