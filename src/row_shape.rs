use crate::column::Column;
use crate::field_type::FieldType;

pub const STATE: &str = "state";
pub const STATE_CODE: &str = "stateCode";
pub const POPULATION: &str = "population";
pub const DENSITY: &str = "populationDensityPerSqKm";
pub const AREA: &str = "areaInSqKm";

/// Ordered description of the columns a census file must carry.
#[derive(Clone, Debug)]
pub struct RowShape {
    name: String,
    columns: Vec<Column>,
}

impl RowShape {
    /// Create a shape named `name` for use in error messages, with columns in file order.
    pub fn new(name: &str, columns: Vec<Column>) -> RowShape {
        RowShape {
            name: name.to_string(),
            columns,
        }
    }

    /// `State,Population,AreaInSqKm,DensityPerSqKm`
    pub fn india_census() -> RowShape {
        RowShape::new(
            "india census",
            vec![
                Column::new("State", FieldType::String).with_field(STATE),
                Column::new("Population", FieldType::Integer).with_field(POPULATION),
                Column::new("AreaInSqKm", FieldType::Integer).with_field(AREA),
                Column::new("DensityPerSqKm", FieldType::Integer).with_field(DENSITY),
            ],
        )
    }

    /// `SrNo,State Name,TIN,StateCode`
    pub fn india_state_code() -> RowShape {
        RowShape::new(
            "india state code",
            vec![
                Column::new("SrNo", FieldType::Integer),
                Column::new("State Name", FieldType::String).with_field(STATE),
                Column::new("TIN", FieldType::Integer),
                Column::new("StateCode", FieldType::String).with_field(STATE_CODE),
            ],
        )
    }

    /// `State Id,State,Population,Housing units,Total area,Water area,Land area,Population Density,Housing Density`
    pub fn us_census() -> RowShape {
        RowShape::new(
            "us census",
            vec![
                Column::new("State Id", FieldType::String).with_field(STATE_CODE),
                Column::new("State", FieldType::String).with_field(STATE),
                Column::new("Population", FieldType::Integer).with_field(POPULATION),
                Column::new("Housing units", FieldType::Integer),
                Column::new("Total area", FieldType::Number).with_field(AREA),
                Column::new("Water area", FieldType::Number),
                Column::new("Land area", FieldType::Number),
                Column::new("Population Density", FieldType::Number).with_field(DENSITY),
                Column::new("Housing Density", FieldType::Number),
            ],
        )
    }

    /// Get the name of this shape.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the columns in file order.
    pub fn columns(&self) -> &Vec<Column> {
        &self.columns
    }

    /// Get the number of columns a header must carry.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns a description of the first difference between `headers` and this shape, or
    /// None when they match.
    pub(crate) fn mismatch<'a, I>(&self, headers: I) -> Option<String>
        where I: IntoIterator<Item=&'a str> {
        let headers: Vec<&str> = headers.into_iter().collect();
        if headers.len() != self.columns.len() {
            return Some(
                format!(
                    "{} header expects {} fields but found {}",
                    self.name,
                    self.columns.len(),
                    headers.len()
                )
            );
        }

        self.columns.iter()
            .zip(headers)
            .enumerate()
            .find(|(_, (column, header))| column.header() != *header)
            .map(|(i, (column, header))| {
                format!(
                    "{} header field {} expected '{}' but found '{}'",
                    self.name,
                    i + 1,
                    column.header(),
                    header
                )
            })
    }
}
