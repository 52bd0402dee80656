mod adaptee;
mod beverage;
mod light;
mod observer;
mod product;
mod singleton;

pub use adaptee::Adaptee;
pub use beverage::{Addition, Coffee, MilkDecorator};
pub use light::{LightOffCommand, LightOnCommand};
pub use observer::NamedObserver;
pub use product::{ConcreteProductA, ConcreteProductB, ProductKind};
pub use singleton::Singleton;
