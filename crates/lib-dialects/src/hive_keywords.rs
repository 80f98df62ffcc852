//! Keyword tables for HiveQL, one phrase per line.

pub(crate) const HIVE_RESERVED_TOP_LEVEL_KEYWORDS: &str = "ALTER COLUMN
ALTER TABLE
CLUSTER BY
DISTRIBUTE BY
FROM
GROUP BY
HAVING
INSERT INTO
INSERT OVERWRITE
INSERT
LIMIT
ORDER BY
SELECT
SET
SORT BY
UPDATE
VALUES
WHERE
";

pub(crate) const HIVE_RESERVED_NEWLINE_KEYWORDS: &str = "AND
CROSS JOIN
ELSE
FULL JOIN
FULL OUTER JOIN
INNER JOIN
JOIN
LATERAL VIEW
LEFT JOIN
LEFT OUTER JOIN
LEFT SEMI JOIN
OR
RIGHT JOIN
RIGHT OUTER JOIN
WHEN
";

pub(crate) const HIVE_RESERVED_KEYWORDS: &str = "ALL
AS
ASC
BETWEEN
BUCKETS
BY
CAST
CLUSTERED
COLLECTION ITEMS
COLUMN
COMMENT
CONF
CREATE
CUBE
CURRENT
DATABASE
DEFAULT
DELETE
DESC
DESCRIBE
DIRECTORY
DISTINCT
DROP
EXCHANGE
EXISTS
EXPLAIN
EXTENDED
EXTERNAL
FALSE
FIELDS TERMINATED BY
FOLLOWING
FOR
FORMAT
FORMATTED
FUNCTION
GRANT
GROUP
GROUPING
IF
IN
INTO
IS
LIKE
LINES TERMINATED BY
LOAD
LOCATION
MACRO
MAP KEYS
NOT
NULL
OF
ON
ONLY
ORDER
OUT
OUTER
OVER
OVERWRITE
PARTITION
PARTITIONED BY
PRECEDING
PRESERVE
RANGE
REDUCE
RLIKE
ROLLUP
ROW FORMAT
ROW
ROWS
SHOW
STORED AS
TABLE
TABLESAMPLE
TBLPROPERTIES
THEN
TO
TRANSFORM
TRUE
UNBOUNDED
UNIQUEJOIN
USING
UTC_TIMESTAMP
VIEW
WINDOW
WITH
";
