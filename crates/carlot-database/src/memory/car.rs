use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use carlot_core::error::AppError;
use carlot_core::result::AppResult;
use carlot_core::types::CarId;
use carlot_entity::car::Car;

use crate::store::CarStore;

#[derive(Debug, Default)]
pub struct MemoryCarStore {
    cars: DashMap<CarId, Car>,
}

impl MemoryCarStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarStore for MemoryCarStore {
    async fn create(&self, car: &Car) -> AppResult<()> {
        match self.cars.entry(car.id) {
            Entry::Occupied(_) => Err(AppError::validation(format!(
                "Car {} already exists",
                car.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(car.clone());
                Ok(())
            }
        }
    }

    async fn get(&self, id: CarId) -> AppResult<Option<Car>> {
        Ok(self.cars.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, car: &Car) -> AppResult<bool> {
        match self.cars.get_mut(&car.id) {
            Some(mut existing) => {
                *existing = car.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: CarId) -> AppResult<bool> {
        Ok(self.cars.remove(&id).is_some())
    }

    async fn get_all(&self) -> AppResult<Vec<Car>> {
        let mut cars: Vec<Car> = self.cars.iter().map(|entry| entry.value().clone()).collect();
        cars.sort_by(|a, b| {
            a.brand
                .cmp(&b.brand)
                .then(a.production_year.cmp(&b.production_year))
        });
        Ok(cars)
    }
}
