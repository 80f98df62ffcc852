//! Keyword tables for BigQuery standard SQL, one phrase per line.

pub(crate) const BIGQUERY_RESERVED_TOP_LEVEL_KEYWORDS: &str = "ADD
ALTER COLUMN
ALTER TABLE
CLUSTER BY
DELETE FROM
EXCEPT
FROM
GROUP BY
HAVING
INSERT INTO
INSERT
LIMIT
MERGE INTO
OPTIONS
ORDER BY
PARTITION BY
QUALIFY
SELECT
SET
UPDATE
VALUES
WHERE
WINDOW
";

pub(crate) const BIGQUERY_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS: &str = "EXCEPT DISTINCT
INTERSECT DISTINCT
UNION ALL
UNION DISTINCT
UNION
";

pub(crate) const BIGQUERY_RESERVED_NEWLINE_KEYWORDS: &str = "AND
CROSS JOIN
ELSE
FULL JOIN
FULL OUTER JOIN
INNER JOIN
JOIN
LEFT JOIN
LEFT OUTER JOIN
OR
RIGHT JOIN
RIGHT OUTER JOIN
WHEN
";

pub(crate) const BIGQUERY_RESERVED_KEYWORDS: &str = "ALL
ANY
ARRAY
AS
ASC
ASSERT_ROWS_MODIFIED
AT
BETWEEN
BY
CAST
COLLATE
CONTAINS
CREATE
CUBE
CURRENT
DEFAULT
DEFINE
DESC
DISTINCT
ENUM
ESCAPE
EXCLUDE
EXISTS
EXTRACT
FALSE
FETCH
FOLLOWING
FOR
GROUPING
GROUPS
HASH
IF
IGNORE
IN
INTERVAL
INTO
IS
LOOKUP
NEW
NO
NOT
NULL
NULLS
OF
ON
ORDER
OUTER
OVER
PRECEDING
PROTO
RANGE
RECURSIVE
RESPECT
ROLLUP
ROWS
SOME
STRUCT
TABLESAMPLE
THEN
TO
TREAT
TRUE
UNBOUNDED
UNNEST
USING
WITHIN
WITH
";
