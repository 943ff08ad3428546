//! Entity to DTO conversions used by the service layer.

use catalog_model::{
    CatalogBrand, CatalogBrandDto, CatalogItem, CatalogItemDto,
    Specification, SpecificationDto,
};

/// Converts a persisted entity into its wire-facing shape.
pub trait IntoDto {
    type Dto;

    fn into_dto(self) -> Self::Dto;
}

impl IntoDto for CatalogBrand {
    type Dto = CatalogBrandDto;

    fn into_dto(self) -> CatalogBrandDto {
        CatalogBrandDto {
            id: self.id,
            brand: self.brand,
        }
    }
}

impl IntoDto for Specification {
    type Dto = SpecificationDto;

    fn into_dto(self) -> SpecificationDto {
        SpecificationDto {
            id: self.id,
            socket: self.socket,
            number_of_cores: self.number_of_cores,
            number_of_threads: self.number_of_threads,
            clock_frequency: self.clock_frequency,
            maximum_clock_frequency: self.maximum_clock_frequency,
            memory_type: self.memory_type,
            video_link: self.video_link,
        }
    }
}

impl IntoDto for CatalogItem {
    type Dto = CatalogItemDto;

    fn into_dto(self) -> CatalogItemDto {
        CatalogItemDto {
            id: self.id,
            catalog_brand_id: self.catalog_brand_id,
            catalog_brand: self.catalog_brand.into_dto(),
            name: self.name,
            price: self.price,
            specification_id: self.specification_id,
            specification: self.specification.into_dto(),
            picture_file_name: self.picture_file_name,
        }
    }
}

impl<T: IntoDto> IntoDto for Vec<T> {
    type Dto = Vec<T::Dto>;

    fn into_dto(self) -> Vec<T::Dto> {
        self.into_iter().map(IntoDto::into_dto).collect()
    }
}
